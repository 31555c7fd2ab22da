use super::User;

/// In-memory store of every known user. Ids are assigned from the live user
/// count; users are never removed, so ids stay stable for a run.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> UserStore {
        UserStore { users: Vec::new() }
    }

    /// Creates a new user and returns the user id.
    pub fn create_user(&mut self, name: &str) -> usize {
        let user_id = self.users.len() + 1;
        self.users.push(User::new(user_id, name.to_owned()));
        user_id
    }

    pub fn get_user(&self, user_id: usize) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn get_user_mut(&mut self, user_id: usize) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == user_id)
    }

    pub fn get_users_count(&self) -> usize {
        self.users.len()
    }
}
