//! Plain records the services work with. Storage rows are converted to and
//! from these in `repo`, so nothing here knows about sea-orm.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMedia {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub user_id: i32,
}

/// A user with its social media collection eagerly loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithSocialMedia {
    pub user: User,
    pub social_media: Vec<SocialMedia>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Column-wise changes; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    pub fn apply(self, user: &mut User) {
        if let Some(v) = self.first_name { user.first_name = v; }
        if let Some(v) = self.last_name { user.last_name = v; }
        if let Some(v) = self.phone { user.phone = v; }
        if let Some(v) = self.email { user.email = v; }
    }
}

impl From<NewUser> for UserChanges {
    fn from(u: NewUser) -> Self {
        Self { first_name: Some(u.first_name), last_name: Some(u.last_name), phone: Some(u.phone), email: Some(u.email) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSocialMedia {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMediaChanges {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl SocialMediaChanges {
    pub fn is_empty(&self) -> bool { self.name.is_none() && self.url.is_none() }

    pub fn apply(self, sm: &mut SocialMedia) {
        if let Some(v) = self.name { sm.name = v; }
        if let Some(v) = self.url { sm.url = v; }
    }
}
