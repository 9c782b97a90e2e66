//! Invitation Models
//!
//! The invitation record is compiled into the binary from `invite.json`.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{InviteError, InviteResult};

/// Format of `event_date`, read as local wall-clock time
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const BUNDLED_INVITE: &str = include_str!("invite.json");

/// Gallery image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteImage {
    pub id: u32,
    pub path: String,
    /// Caption, empty when the image has none
    #[serde(default)]
    pub title: String,
}

/// Static invitation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteData {
    pub title: String,
    pub event_date: String,
    pub venue: String,
    pub venue_date: String,
    pub venue2: String,
    pub venue2_date: String,
    pub contact: String,
    /// Background track
    #[serde(default)]
    pub music: String,
    pub images: Vec<InviteImage>,
}

/// Image id as handed in from markup: either a number or its text form.
///
/// Matching follows loose (`==`) comparison: text is trimmed and read as a
/// number, and blank text reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageKey {
    Number(f64),
    Text(String),
}

impl ImageKey {
    fn as_number(&self) -> Option<f64> {
        match self {
            ImageKey::Number(n) => Some(*n),
            ImageKey::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }

    pub fn matches(&self, id: u32) -> bool {
        self.as_number() == Some(f64::from(id))
    }
}

impl From<u32> for ImageKey {
    fn from(id: u32) -> Self {
        ImageKey::Number(f64::from(id))
    }
}

impl From<i32> for ImageKey {
    fn from(id: i32) -> Self {
        ImageKey::Number(f64::from(id))
    }
}

impl From<f64> for ImageKey {
    fn from(id: f64) -> Self {
        ImageKey::Number(id)
    }
}

impl From<&str> for ImageKey {
    fn from(id: &str) -> Self {
        ImageKey::Text(id.to_string())
    }
}

impl From<String> for ImageKey {
    fn from(id: String) -> Self {
        ImageKey::Text(id)
    }
}

impl InviteData {
    /// Parse and validate the record compiled into the binary
    pub fn bundled() -> InviteResult<Self> {
        Self::from_json(BUNDLED_INVITE)
    }

    pub fn from_json(json: &str) -> InviteResult<Self> {
        let data: InviteData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> InviteResult<()> {
        self.event_at()?;

        let mut seen = HashSet::new();
        for image in &self.images {
            if !seen.insert(image.id) {
                return Err(InviteError::DuplicateImageId(image.id));
            }
            if image.path.trim().is_empty() {
                return Err(InviteError::EmptyImagePath(image.id));
            }
        }
        Ok(())
    }

    /// Target instant as local wall-clock time
    pub fn event_at(&self) -> InviteResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.event_date, EVENT_DATE_FORMAT).map_err(|source| {
            InviteError::InvalidEventDate {
                value: self.event_date.clone(),
                source,
            }
        })
    }

    pub fn find_image(&self, id: impl Into<ImageKey>) -> Option<&InviteImage> {
        let key = id.into();
        self.images.iter().find(|image| key.matches(image.id))
    }

    /// Path of the image with this id, or "" when there is none
    pub fn get_image(&self, id: impl Into<ImageKey>) -> &str {
        self.find_image(id).map(|image| image.path.as_str()).unwrap_or("")
    }

    /// `tel:` link for the contact number
    pub fn contact_href(&self) -> String {
        let digits: String = self
            .contact
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND_PHOTO: &str = "/assets/images/DSC05975 copy1.jpg.jpeg";

    fn bundled() -> InviteData {
        InviteData::bundled().expect("bundled invite should parse")
    }

    #[test]
    fn test_bundled_invite_is_valid() {
        let invite = bundled();
        assert_eq!(invite.title, "Subhra Weds Ishani");
        assert_eq!(invite.images.len(), 7);
        let at = invite.event_at().unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2026-03-09 18:30");
    }

    #[test]
    fn test_get_image_number_and_text() {
        let invite = bundled();
        assert_eq!(invite.get_image(7u32), SECOND_PHOTO);
        assert_eq!(invite.get_image("7"), SECOND_PHOTO);
        assert_eq!(invite.get_image(" 7 "), SECOND_PHOTO);
        assert_eq!(invite.get_image(7.0), SECOND_PHOTO);
    }

    #[test]
    fn test_get_image_missing() {
        let invite = bundled();
        assert_eq!(invite.get_image(999u32), "");
        assert_eq!(invite.get_image(3u32), "");
        assert_eq!(invite.get_image("seven"), "");
        assert_eq!(invite.get_image(-1), "");
    }

    #[test]
    fn test_blank_key_reads_as_zero() {
        let invite = bundled();
        assert_eq!(invite.get_image(""), "/assets/images/background.jpeg");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut invite = bundled();
        invite.images.push(InviteImage {
            id: 7,
            path: "/assets/images/other.jpeg".to_string(),
            title: String::new(),
        });
        assert!(matches!(invite.validate(), Err(InviteError::DuplicateImageId(7))));
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut invite = bundled();
        invite.images[0].path = "  ".to_string();
        assert!(matches!(invite.validate(), Err(InviteError::EmptyImagePath(0))));
    }

    #[test]
    fn test_bad_event_date_rejected() {
        let mut invite = bundled();
        invite.event_date = "9th March 2026".to_string();
        assert!(matches!(
            invite.validate(),
            Err(InviteError::InvalidEventDate { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            InviteData::from_json("{\"title\": 1}"),
            Err(InviteError::Config(_))
        ));
    }

    #[test]
    fn test_contact_href() {
        let mut invite = bundled();
        assert_eq!(invite.contact_href(), "tel:7003717430");
        invite.contact = "+91 70037 17430".to_string();
        assert_eq!(invite.contact_href(), "tel:+917003717430");
    }
}
