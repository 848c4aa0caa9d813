use crate::model::{Money, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("Cannot split an expense across zero participants")]
    NoParticipants,
    #[error("Share for '{participant_id}' must not be negative (found {share})")]
    NegativeShare {
        participant_id: ParticipantId,
        share: Money,
    },
    #[error("Custom splits ({total}) don't equal the total amount ({amount})")]
    Mismatch { total: Money, amount: Money },
}
