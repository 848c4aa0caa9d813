use crate::{
    error::SplitError,
    model::{Money, ParticipantId, Splits},
    services::SETTLEMENT_TOLERANCE,
};
use indexmap::IndexSet;

/// Builds the `splits` mapping of an expense.
pub struct SplitPolicy;

impl SplitPolicy {
    /// Divides `amount` evenly at cent precision.
    ///
    /// Every participant receives the same truncated share; leftover cents
    /// go one each to the first participants, and any sub-cent remainder to
    /// the first participant, so the shares always sum to `amount`.
    pub fn equal<'a, I>(amount: Money, participants: I) -> Result<Splits, SplitError>
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        let participants: IndexSet<&ParticipantId> = participants.into_iter().collect();
        if participants.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        let count = participants.len() as i64;
        let base = amount
            .checked_div(count)
            .ok_or(SplitError::NoParticipants)?
            .truncate_cents();
        let base_total = base.checked_mul(count).unwrap_or(amount);
        let mut remainder = amount - base_total;

        let mut splits = Splits::with_capacity(participants.len());
        for participant_id in participants {
            let mut share = base;
            if remainder >= Money::CENT {
                share += Money::CENT;
                remainder -= Money::CENT;
            }
            splits.insert(participant_id.clone(), share);
        }

        if !remainder.is_zero()
            && let Some((_, first)) = splits.first_mut()
        {
            *first += remainder;
        }

        Ok(splits)
    }

    /// Accepts caller-chosen shares if they are non-negative and sum to
    /// `amount` within one cent. Repeated ids are merged.
    pub fn custom<I>(amount: Money, shares: I) -> Result<Splits, SplitError>
    where
        I: IntoIterator<Item = (ParticipantId, Money)>,
    {
        let shares: Vec<(ParticipantId, Money)> = shares.into_iter().collect();
        if let Some((participant_id, share)) = shares.iter().find(|(_, share)| share.is_negative())
        {
            return Err(SplitError::NegativeShare {
                participant_id: participant_id.clone(),
                share: *share,
            });
        }

        let ceiling = amount.checked_add(SETTLEMENT_TOLERANCE).unwrap_or(amount);
        let mut splits = Splits::new();
        let mut total = Money::ZERO;
        for (participant_id, share) in shares {
            // Shares are non-negative, so once the running total passes the
            // ceiling it can only move further away from `amount`.
            total = total.saturating_add(share);
            if total > ceiling {
                return Err(SplitError::Mismatch { total, amount });
            }
            *splits.entry(participant_id).or_insert(Money::ZERO) += share;
        }

        if !total.approx_eq(amount, SETTLEMENT_TOLERANCE) {
            return Err(SplitError::Mismatch { total, amount });
        }

        Ok(splits)
    }
}
