use crate::{error::LedgerError, ports::MemberDirectory};
use chrono::{DateTime, Utc};
use smol_str::SmolStr;
use splitease_domain::{
    Category, Expense, ExpenseId, Money, Participant, ParticipantId, SplitPolicy, Splits,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SplitMethod {
    /// Equal shares across the whole roster.
    EqualAll,
    /// Equal shares across the listed participants.
    EqualAmong(Vec<ParticipantId>),
    /// Explicit per-participant shares.
    Custom(Vec<(ParticipantId, Money)>),
}

/// Input for [`Ledger::add_expense`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: SmolStr,
    pub amount: Money,
    pub paid_by: ParticipantId,
    pub category: Category,
    /// Defaults to the current time.
    pub date: Option<DateTime<Utc>>,
    pub split: SplitMethod,
}

/// Owned roster and expense history.
///
/// The first participant is the owner and can never be removed. Expenses are
/// kept newest first.
#[derive(Debug, Clone)]
pub struct Ledger {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    next_expense_id: u64,
}

impl Ledger {
    pub fn new(owner: Participant) -> Self {
        Self {
            participants: vec![owner],
            expenses: Vec::new(),
            next_expense_id: 1,
        }
    }

    /// Builds a ledger whose first member becomes the owner.
    pub fn from_members<I>(members: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = Participant>,
    {
        let mut members = members.into_iter();
        let Some(owner) = members.next() else {
            return Err(LedgerError::EmptyName);
        };
        if owner.name.trim().is_empty() {
            return Err(LedgerError::EmptyName);
        }

        let mut ledger = Self::new(owner);
        for member in members {
            ledger.add_participant(member)?;
        }
        Ok(ledger)
    }

    pub fn owner(&self) -> &Participant {
        &self.participants[0]
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn participant(&self, participant_id: &ParticipantId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| &participant.id == participant_id)
    }

    pub fn contains(&self, participant_id: &ParticipantId) -> bool {
        self.participant(participant_id).is_some()
    }

    pub fn add_participant(&mut self, participant: Participant) -> Result<(), LedgerError> {
        if participant.name.trim().is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.contains(&participant.id) {
            return Err(LedgerError::DuplicateParticipant(participant.id));
        }
        if let Some(email) = &participant.email
            && self
                .participants
                .iter()
                .any(|existing| existing.email.as_ref() == Some(email))
        {
            return Err(LedgerError::DuplicateEmail(email.to_string()));
        }

        tracing::debug!(participant_id = %participant.id, "Participant joined");
        self.participants.push(participant);
        Ok(())
    }

    /// Removes a participant and drops their share from every expense.
    ///
    /// Expenses they paid keep their payer id; balance computation ignores
    /// the credit once the payer has left the roster.
    pub fn remove_participant(
        &mut self,
        participant_id: &ParticipantId,
    ) -> Result<Participant, LedgerError> {
        if &self.owner().id == participant_id {
            return Err(LedgerError::CannotRemoveOwner(participant_id.clone()));
        }
        let Some(position) = self
            .participants
            .iter()
            .position(|participant| &participant.id == participant_id)
        else {
            return Err(LedgerError::UnknownParticipant(participant_id.clone()));
        };

        let removed = self.participants.remove(position);
        let mut stripped = 0usize;
        for expense in &mut self.expenses {
            if expense.splits.shift_remove(participant_id).is_some() {
                stripped += 1;
            }
        }

        tracing::debug!(
            participant_id = %participant_id,
            stripped_expense_count = stripped,
            "Participant left"
        );
        Ok(removed)
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, LedgerError> {
        let ExpenseDraft {
            description,
            amount,
            paid_by,
            category,
            date,
            split,
        } = draft;

        if description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > Money::MAX_EXPENSE {
            return Err(LedgerError::AmountTooLarge(amount));
        }
        if !self.contains(&paid_by) {
            return Err(LedgerError::UnknownPayer(paid_by));
        }

        let splits = self.build_splits(amount, split)?;
        let id = ExpenseId(self.next_expense_id);
        self.next_expense_id += 1;

        tracing::debug!(
            expense_id = %id,
            amount = %amount,
            paid_by = %paid_by,
            share_count = splits.len(),
            "Expense added"
        );

        self.expenses.insert(
            0,
            Expense {
                id,
                description,
                amount,
                paid_by,
                splits,
                category,
                date: date.unwrap_or_else(Utc::now),
            },
        );
        Ok(id)
    }

    pub fn delete_expense(&mut self, expense_id: ExpenseId) -> Result<Expense, LedgerError> {
        let Some(position) = self
            .expenses
            .iter()
            .position(|expense| expense.id == expense_id)
        else {
            return Err(LedgerError::UnknownExpense(expense_id));
        };

        tracing::debug!(expense_id = %expense_id, "Expense deleted");
        Ok(self.expenses.remove(position))
    }

    fn build_splits(&self, amount: Money, split: SplitMethod) -> Result<Splits, LedgerError> {
        match split {
            SplitMethod::EqualAll => Ok(SplitPolicy::equal(
                amount,
                self.participants.iter().map(|participant| &participant.id),
            )?),
            SplitMethod::EqualAmong(members) => {
                self.ensure_known(members.iter())?;
                Ok(SplitPolicy::equal(amount, &members)?)
            }
            SplitMethod::Custom(shares) => {
                self.ensure_known(shares.iter().map(|(participant_id, _)| participant_id))?;
                Ok(SplitPolicy::custom(amount, shares)?)
            }
        }
    }

    fn ensure_known<'a, I>(&self, participant_ids: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        for participant_id in participant_ids {
            if !self.contains(participant_id) {
                return Err(LedgerError::UnknownParticipant(participant_id.clone()));
            }
        }
        Ok(())
    }
}

impl MemberDirectory for Ledger {
    fn display_name(&self, participant_id: &ParticipantId) -> Option<&str> {
        self.participant(participant_id)
            .map(|participant| participant.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use splitease_domain::SplitError;

    #[fixture]
    fn ledger() -> Ledger {
        Ledger::from_members([
            Participant::new("1", "You").with_email("you@example.com"),
            Participant::new("alice", "Alice").with_email("alice@example.com"),
            Participant::new("bob", "Bob"),
        ])
        .unwrap()
    }

    fn draft(paid_by: &str, amount: i64, split: SplitMethod) -> ExpenseDraft {
        ExpenseDraft {
            description: "Dinner".into(),
            amount: Money::from_i64(amount),
            paid_by: ParticipantId::new(paid_by),
            category: Category::Food,
            date: Some(DateTime::<Utc>::UNIX_EPOCH),
            split,
        }
    }

    fn shares(expense: &Expense) -> Vec<(&str, Money)> {
        expense
            .splits
            .iter()
            .map(|(id, share)| (id.as_str(), *share))
            .collect()
    }

    #[rstest]
    fn owner_is_first_member(ledger: Ledger) {
        assert_eq!(ledger.owner().id.as_str(), "1");
        assert_eq!(ledger.display_name(&ParticipantId::new("alice")), Some("Alice"));
    }

    #[rstest]
    #[case::empty_name(Participant::new("carol", "  "), LedgerError::EmptyName)]
    #[case::duplicate_id(
        Participant::new("bob", "Robert"),
        LedgerError::DuplicateParticipant(ParticipantId::new("bob"))
    )]
    #[case::duplicate_email(
        Participant::new("carol", "Carol").with_email("alice@example.com"),
        LedgerError::DuplicateEmail("alice@example.com".to_string())
    )]
    fn add_participant_rejects(
        mut ledger: Ledger,
        #[case] participant: Participant,
        #[case] expected: LedgerError,
    ) {
        assert_eq!(ledger.add_participant(participant), Err(expected));
        assert_eq!(ledger.participants().len(), 3);
    }

    #[rstest]
    fn owner_cannot_be_removed(mut ledger: Ledger) {
        let owner = ParticipantId::new("1");
        assert_eq!(
            ledger.remove_participant(&owner),
            Err(LedgerError::CannotRemoveOwner(owner))
        );
    }

    #[rstest]
    fn unknown_participant_cannot_be_removed(mut ledger: Ledger) {
        let ghost = ParticipantId::new("ghost");
        assert_eq!(
            ledger.remove_participant(&ghost),
            Err(LedgerError::UnknownParticipant(ghost))
        );
    }

    #[rstest]
    fn removing_participant_strips_their_shares(mut ledger: Ledger) {
        ledger.add_expense(draft("alice", 90, SplitMethod::EqualAll)).unwrap();
        ledger.add_expense(draft("bob", 30, SplitMethod::EqualAll)).unwrap();

        let removed = ledger.remove_participant(&ParticipantId::new("bob")).unwrap();

        assert_eq!(removed.name, "Bob");
        assert_eq!(ledger.participants().len(), 2);
        for expense in ledger.expenses() {
            assert!(!expense.splits.contains_key(&ParticipantId::new("bob")));
        }
        assert_eq!(ledger.expenses()[0].paid_by.as_str(), "bob");
    }

    #[rstest]
    fn expenses_are_newest_first_with_sequential_ids(mut ledger: Ledger) {
        let first = ledger.add_expense(draft("1", 30, SplitMethod::EqualAll)).unwrap();
        let second = ledger.add_expense(draft("alice", 60, SplitMethod::EqualAll)).unwrap();

        assert_eq!(first, ExpenseId(1));
        assert_eq!(second, ExpenseId(2));
        let ids: Vec<ExpenseId> = ledger.expenses().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![ExpenseId(2), ExpenseId(1)]);
    }

    #[rstest]
    #[case::equal_all(
        SplitMethod::EqualAll,
        vec![("1", Money::from_i64(30)), ("alice", Money::from_i64(30)), ("bob", Money::from_i64(30))]
    )]
    #[case::equal_among(
        SplitMethod::EqualAmong(vec![ParticipantId::new("alice"), ParticipantId::new("bob")]),
        vec![("alice", Money::from_i64(45)), ("bob", Money::from_i64(45))]
    )]
    #[case::custom(
        SplitMethod::Custom(vec![
            (ParticipantId::new("1"), Money::from_i64(10)),
            (ParticipantId::new("bob"), Money::from_i64(80)),
        ]),
        vec![("1", Money::from_i64(10)), ("bob", Money::from_i64(80))]
    )]
    fn add_expense_builds_splits(
        mut ledger: Ledger,
        #[case] split: SplitMethod,
        #[case] expected: Vec<(&str, Money)>,
    ) {
        ledger.add_expense(draft("alice", 90, split)).unwrap();
        assert_eq!(shares(&ledger.expenses()[0]), expected);
    }

    #[rstest]
    #[case::empty_description(
        ExpenseDraft { description: " ".into(), ..draft("1", 10, SplitMethod::EqualAll) },
        LedgerError::EmptyDescription
    )]
    #[case::zero_amount(draft("1", 0, SplitMethod::EqualAll), LedgerError::NonPositiveAmount(Money::ZERO))]
    #[case::too_large(
        draft("1", 1_000_000_001, SplitMethod::EqualAll),
        LedgerError::AmountTooLarge(Money::from_i64(1_000_000_001))
    )]
    #[case::unknown_payer(
        draft("ghost", 10, SplitMethod::EqualAll),
        LedgerError::UnknownPayer(ParticipantId::new("ghost"))
    )]
    #[case::unknown_split_member(
        draft("1", 10, SplitMethod::EqualAmong(vec![ParticipantId::new("ghost")])),
        LedgerError::UnknownParticipant(ParticipantId::new("ghost"))
    )]
    #[case::empty_split_members(
        draft("1", 10, SplitMethod::EqualAmong(vec![])),
        LedgerError::Split(SplitError::NoParticipants)
    )]
    #[case::custom_mismatch(
        draft("1", 10, SplitMethod::Custom(vec![(ParticipantId::new("1"), Money::from_i64(4))])),
        LedgerError::Split(SplitError::Mismatch {
            total: Money::from_i64(4),
            amount: Money::from_i64(10),
        })
    )]
    fn add_expense_rejects(
        mut ledger: Ledger,
        #[case] draft: ExpenseDraft,
        #[case] expected: LedgerError,
    ) {
        assert_eq!(ledger.add_expense(draft), Err(expected));
        assert!(ledger.expenses().is_empty());
    }

    #[rstest]
    fn delete_expense(mut ledger: Ledger) {
        let id = ledger.add_expense(draft("1", 30, SplitMethod::EqualAll)).unwrap();

        assert_eq!(ledger.delete_expense(id).map(|e| e.id), Ok(id));
        assert_eq!(
            ledger.delete_expense(id),
            Err(LedgerError::UnknownExpense(id))
        );
    }
}
