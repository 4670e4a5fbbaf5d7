/// Live gateway session, owned by the platform client.
///
/// Only the two things the presence loop needs are exposed.
pub trait Session: Send + Sync {
    /// Number of communities (guilds) the bot has joined
    fn community_count(&self) -> usize;

    /// Replace the status line shown next to the bot's name
    fn set_presence(&self, status: &str);
}
