//! Social links
//!
//! [`Social`] is the stored sub-document, [`SocialPatch`] the sparse write.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field::Field;

/// Social network links embedded in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Sparse write to [`Social`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialPatch {
    pub youtube: Field<String>,
    pub twitter: Field<String>,
    pub facebook: Field<String>,
    pub linkedin: Field<String>,
    pub instagram: Field<String>,
}

impl SocialPatch {
    fn entries(&self) -> [(&'static str, &Field<String>); 5] {
        [
            ("youtube", &self.youtube),
            ("twitter", &self.twitter),
            ("facebook", &self.facebook),
            ("linkedin", &self.linkedin),
            ("instagram", &self.instagram),
        ]
    }

    /// Overwrite supplied links, keep the others.
    pub fn apply_to(&self, social: &mut Social) {
        self.youtube.apply_to(&mut social.youtube);
        self.twitter.apply_to(&mut social.twitter);
        self.facebook.apply_to(&mut social.facebook);
        self.linkedin.apply_to(&mut social.linkedin);
        self.instagram.apply_to(&mut social.instagram);
    }

    /// JSON object holding only the supplied links; merged into stored JSON with `||`.
    pub fn to_json_object(&self) -> Value {
        let map: Map<String, Value> = self
            .entries()
            .into_iter()
            .filter_map(|(key, field)| field.as_str().map(|v| (key.to_owned(), Value::from(v))))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unsupplied_links() {
        let mut social = Social {
            twitter: Some("https://twitter.com/old".into()),
            youtube: Some("https://youtube.com/keep".into()),
            ..Social::default()
        };
        let patch = SocialPatch {
            twitter: Field::Set("https://twitter.com/new".into()),
            ..SocialPatch::default()
        };

        patch.apply_to(&mut social);

        assert_eq!(social.twitter.as_deref(), Some("https://twitter.com/new"));
        assert_eq!(social.youtube.as_deref(), Some("https://youtube.com/keep"));
        assert!(social.linkedin.is_none());
    }

    #[test]
    fn test_json_object_contains_only_supplied() {
        let patch = SocialPatch {
            linkedin: Field::Set("in/someone".into()),
            ..SocialPatch::default()
        };
        assert_eq!(
            patch.to_json_object(),
            serde_json::json!({ "linkedin": "in/someone" })
        );
        assert_eq!(SocialPatch::default().to_json_object(), serde_json::json!({}));
    }

    #[test]
    fn test_empty_social_serializes_as_object() {
        let json = serde_json::to_value(Social::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
