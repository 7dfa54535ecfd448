use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Languages the invitation ships bundles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Ko,
    El,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ko, Language::El];

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            "el" => Some(Language::El),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::El => "el",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub description: String,
}

/// Groom/bride profile card. The two sections share one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSection {
    pub title: String,
    pub name: String,
    pub origin: String,
    pub profession: String,
    pub mbti: String,
    pub zodiac: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyInfo {
    pub title: String,
    pub description: String,
    pub rain_plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DressCodeInfo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceptionInfo {
    pub title: String,
    pub description: String,
    pub activities: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutWedding {
    pub title: String,
    pub description: String,
    pub ceremony: CeremonyInfo,
    pub dress_code: DressCodeInfo,
    pub reception: ReceptionInfo,
}

/// Every user-facing string of the RSVP dialog. The submission pipeline never
/// reads these; they only feed the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpFormCopy {
    pub button: String,
    pub modal_title: String,
    pub event_details: String,
    pub venue: String,
    pub guest_label: String,
    pub full_name_placeholder: String,
    pub dietary_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub add_guest_button: String,
    pub submit_button: String,
    pub submitting_button: String,
    pub success_message: String,
    pub success_sub_message: String,
    pub error_message: String,
    pub close_button: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSection {
    pub title: String,
    pub honor_message: String,
    pub seating_message: String,
    pub form: RsvpFormCopy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportInfo {
    pub title: String,
    pub station: String,
    pub directions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingInfo {
    pub title: String,
    pub drop_off: String,
    pub nearby: String,
    pub map_reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingLocation {
    pub name: String,
    pub distance: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettingThere {
    pub title: String,
    pub venue_full_name: String,
    pub address: String,
    pub transport: TransportInfo,
    pub parking: ParkingInfo,
    pub parking_location_title: String,
    pub parking_locations: Vec<ParkingLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Closing {
    pub with_love: String,
    pub names: String,
}

/// One language's complete content bundle for the invitation page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language: String,
    pub couple_names: String,
    pub wedding_date: String,
    pub venue_name: String,
    pub venue_city: String,
    pub venue_full_date: String,
    pub venue_time: String,
    pub wedding_announcement: String,
    pub celebration_message: String,
    pub distance_message: String,
    pub from_two_stories_to_one: String,
    pub shared_chapter: String,
    pub dot_joining: String,
    pub our_story: String,
    pub timeline_events: BTreeMap<String, TimelineEvent>,
    pub dot_joined_text: String,
    pub dot_joined_text_end: String,
    pub groom_section: PersonSection,
    pub bride_section: PersonSection,
    pub about_wedding: AboutWedding,
    pub rsvp: RsvpSection,
    pub getting_there: GettingThere,
    pub closing: Closing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.code()), Some(language));
        }
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse("EN"), None);
    }
}
