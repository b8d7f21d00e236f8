//! Text rendering of engine output for the terminal.

use studyroom_session::{Group, Message, SessionEvent};

pub fn message_line(message: &Message) -> String {
    let flag = if message.flagged { " [flagged]" } else { "" };
    format!(
        "#{} {} {}: {}{}",
        message.id,
        message.display_time(),
        message.author,
        message.text,
        flag
    )
}

pub fn group_line(group: &Group) -> String {
    let joined = if group.joined { " (joined)" } else { "" };
    format!(
        "[{}] {} - {} members{}",
        group.id, group.name, group.member_count, joined
    )
}

/// User-facing notice for an engine event.
pub fn notice(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Joined { name } => format!("* {name} joined the room"),
        SessionEvent::Left { name } => format!("* {name} left the room"),
        SessionEvent::MessagePosted { id, flagged, .. } if *flagged => {
            format!("* Message #{id} was flagged for review")
        }
        SessionEvent::MessagePosted { id, .. } => format!("* Message #{id} sent"),
        SessionEvent::AdminGranted => "* Admin access granted".to_string(),
        SessionEvent::AdminRevoked => "* Admin mode exited".to_string(),
        SessionEvent::UserBanned { name } => format!("* User {name} has been banned"),
        SessionEvent::UserUnbanned { name } => format!("* User {name} has been unbanned"),
        SessionEvent::MessageDeleted { id } => format!("* Message #{id} deleted"),
        SessionEvent::FlaggedCleared { removed } => {
            format!("* Cleared {removed} flagged message(s)")
        }
        SessionEvent::LogCleared { removed } => format!("* Cleared {removed} message(s)"),
        SessionEvent::PresenceCleared { removed } => {
            format!("* Removed {removed} user(s) from the online list")
        }
        SessionEvent::GroupJoined { id } => format!("* Joined group {id}"),
        SessionEvent::GroupLeft { id } => format!("* Left group {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyroom_shared::types::{GroupId, IdentityKey, MessageId};

    #[test]
    fn test_notice_text() {
        assert_eq!(
            notice(&SessionEvent::UserBanned {
                name: IdentityKey::from_name("Alice")
            }),
            "* User alice has been banned"
        );
        assert_eq!(
            notice(&SessionEvent::GroupJoined { id: GroupId(2) }),
            "* Joined group 2"
        );
        assert_eq!(
            notice(&SessionEvent::MessageDeleted { id: MessageId(5) }),
            "* Message #5 deleted"
        );
    }

    #[test]
    fn test_group_line() {
        let mut group = Group::new(GroupId(1), "Physics Help Group", 23);
        assert_eq!(group_line(&group), "[1] Physics Help Group - 23 members");
        group.joined = true;
        assert!(group_line(&group).ends_with("(joined)"));
    }
}
