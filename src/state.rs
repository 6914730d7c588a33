use crate::data_access::DataAccess;
use crate::models::UserId;

#[derive(Clone)]
pub struct AppState {
    pub data: DataAccess,
    pub default_user_id: UserId,
}

impl AppState {
    pub fn new(data: DataAccess, default_user_id: UserId) -> Self {
        Self {
            data,
            default_user_id,
        }
    }
}
