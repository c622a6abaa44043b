use crate::harvest::types::Profile;

/// Profile fields passed through unchanged from the Harvest response.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileView {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<Profile> for ProfileView {
    fn from(p: Profile) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
        }
    }
}
