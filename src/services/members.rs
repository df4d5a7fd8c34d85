//! Membership service

use crate::{error::AppResult, models::member::Member, repository::Repository};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List members, optionally by exact status
    pub async fn list_members(&self, status: Option<&str>) -> AppResult<Vec<Member>> {
        self.repository.members.list(status).await
    }

    pub async fn get_member(&self, id: i64) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }
}
