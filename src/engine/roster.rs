use crate::engine::player::{Player, PlayerId};

/// Players in display order. Ids come from a counter that never rewinds, so a
/// removed player's id is never handed out again.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends "Player N" where N is the roster length after the push. Names are
    /// not checked against existing ones, so add, add, remove, add yields two "Player 2".
    pub fn add(&mut self) -> &Player {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        let name = format!("Player {}", self.players.len() + 1);
        self.players.push(Player::new(id, name));
        &self.players[self.players.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Option<Player> {
        (index < self.players.len()).then(|| self.players.remove(index))
    }

    /// Returns the previous name, or `None` if `index` is out of range.
    pub fn rename(&mut self, index: usize, name: String) -> Option<String> {
        let player = self.players.get_mut(index)?;
        Some(player.set_name(name))
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster) -> Vec<&str> {
        roster.iter().map(Player::name).collect()
    }

    #[test]
    fn default_names_follow_roster_length() {
        let mut roster = Roster::new();
        roster.add();
        roster.add();
        assert_eq!(names(&roster), ["Player 1", "Player 2"]);
    }

    #[test]
    fn default_name_can_repeat_after_a_removal() {
        let mut roster = Roster::new();
        roster.add();
        roster.add();
        roster.remove(0);
        roster.add();
        assert_eq!(names(&roster), ["Player 2", "Player 2"]);
        let ids = roster.iter().map(Player::id).collect::<Vec<_>>();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut roster = Roster::new();
        let first = roster.add().id();
        roster.remove(0);
        let second = roster.add().id();
        assert_ne!(first, second);
        assert_eq!(roster.get(0).map(Player::id), Some(second));
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let mut roster = Roster::new();
        roster.add();
        assert!(roster.remove(3).is_none());
        assert!(roster.rename(1, "Ghost".to_owned()).is_none());
        assert_eq!(names(&roster), ["Player 1"]);
    }

    #[test]
    fn rename_returns_the_old_name() {
        let mut roster = Roster::new();
        roster.add();
        assert_eq!(roster.rename(0, "Curry".to_owned()).as_deref(), Some("Player 1"));
        assert_eq!(names(&roster), ["Curry"]);
    }
}
