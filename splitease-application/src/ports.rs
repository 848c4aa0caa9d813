use crate::{Script, error::ScriptParseError};
use splitease_domain::{Participant, ParticipantId};
use std::collections::HashMap;

pub trait ScriptParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<Script, ScriptParseError>;
}

/// Resolves participant ids to display names.
pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, participant_id: &ParticipantId) -> Option<&str>;
}

impl MemberDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, participant_id: &ParticipantId) -> Option<&str> {
        self.get(participant_id).map(String::as_str)
    }
}

impl MemberDirectory for Vec<Participant> {
    fn display_name(&self, participant_id: &ParticipantId) -> Option<&str> {
        self.iter()
            .find(|participant| &participant.id == participant_id)
            .map(|participant| participant.name.as_str())
    }
}
