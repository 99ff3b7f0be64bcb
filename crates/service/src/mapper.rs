//! Pure entity → response transforms.

use crate::domain::{SocialMedia, UserWithSocialMedia};
use crate::dto::{SocialMediaResponse, UserResponse};

/// Map a social media record; `owner_id` overrides the stored reference when
/// the caller already knows the owner (e.g. while mapping a user's collection).
pub fn social_media_response(sm: SocialMedia, owner_id: Option<i32>) -> SocialMediaResponse {
    SocialMediaResponse {
        id: sm.id,
        name: sm.name,
        url: sm.url,
        user_id: owner_id.unwrap_or(sm.user_id),
    }
}

pub fn social_media_responses(items: Vec<SocialMedia>) -> Vec<SocialMediaResponse> {
    items.into_iter().map(|sm| social_media_response(sm, None)).collect()
}

pub fn user_response(loaded: UserWithSocialMedia) -> UserResponse {
    let UserWithSocialMedia { user, social_media } = loaded;
    let owner = user.id;
    UserResponse {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        phone: user.phone,
        email: user.email,
        social_media: social_media.into_iter().map(|sm| social_media_response(sm, Some(owner))).collect(),
    }
}

pub fn user_responses(users: Vec<UserWithSocialMedia>) -> Vec<UserResponse> {
    users.into_iter().map(user_response).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    fn sm(id: i32, user_id: i32) -> SocialMedia {
        SocialMedia { id, name: format!("net{id}"), url: format!("https://example.com/{id}"), user_id }
    }

    #[test]
    fn user_mapping_embeds_collection_with_owner_id() {
        let loaded = UserWithSocialMedia {
            user: User { id: 7, first_name: "Ana".into(), last_name: "Lopez".into(), phone: "555".into(), email: "ana@x.com".into() },
            social_media: vec![sm(1, 7), sm(2, 7)],
        };
        let r = user_response(loaded);
        assert_eq!(r.id, 7);
        assert_eq!(r.first_name, "Ana");
        assert_eq!(r.social_media.len(), 2);
        assert!(r.social_media.iter().all(|s| s.user_id == 7));
    }

    #[test]
    fn social_media_mapping_prefers_explicit_owner() {
        assert_eq!(social_media_response(sm(1, 3), None).user_id, 3);
        assert_eq!(social_media_response(sm(1, 3), Some(9)).user_id, 9);
    }

    #[test]
    fn empty_inputs_map_to_empty_outputs() {
        assert!(user_responses(vec![]).is_empty());
        assert!(social_media_responses(vec![]).is_empty());
    }
}
