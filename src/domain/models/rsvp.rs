use serde::{Deserialize, Serialize};

/// The invitation assumes at most a named guest plus one companion.
pub const MAX_GUESTS_PER_RSVP: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dietary: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, dietary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dietary: dietary.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Name,
    Dietary,
}

/// In-progress RSVP form state. Holds at least one guest from construction
/// onward; there is no operation that removes guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpDraft {
    pub guests: Vec<Guest>,
    pub message: String,
}

impl RsvpDraft {
    pub fn new() -> Self {
        Self {
            guests: vec![Guest::default()],
            message: String::new(),
        }
    }

    /// Appends an empty guest. No-op once the cap is reached.
    pub fn add_guest(&mut self) {
        if self.guests.len() < MAX_GUESTS_PER_RSVP {
            self.guests.push(Guest::default());
        }
    }

    /// Replaces one field of the guest at `index`. Out-of-bounds indices are
    /// ignored; other guests are never touched.
    pub fn update_guest(&mut self, index: usize, field: GuestField, value: &str) {
        if let Some(guest) = self.guests.get_mut(index) {
            match field {
                GuestField::Name => guest.name = value.to_string(),
                GuestField::Dietary => guest.dietary = value.to_string(),
            }
        }
    }

    pub fn update_message(&mut self, value: &str) {
        self.message = value.to_string();
    }

    /// Guest #1 labels the whole submission and must carry a real name.
    pub fn is_submittable(&self) -> bool {
        self.guests
            .first()
            .is_some_and(|guest| !guest.name.trim().is_empty())
    }
}

impl Default for RsvpDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_empty_guest() {
        let draft = RsvpDraft::new();
        assert_eq!(draft.guests, vec![Guest::default()]);
        assert_eq!(draft.message, "");
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_add_guest_stops_at_cap() {
        let mut draft = RsvpDraft::new();
        draft.add_guest();
        assert_eq!(draft.guests.len(), 2);

        draft.add_guest();
        assert_eq!(draft.guests.len(), 2, "Cap must leave the draft unchanged");
    }

    #[test]
    fn test_update_guest_only_touches_target() {
        let mut draft = RsvpDraft::new();
        draft.add_guest();
        draft.update_guest(0, GuestField::Name, "Jane Doe");
        draft.update_guest(1, GuestField::Dietary, "vegan");

        assert_eq!(draft.guests[0], Guest::new("Jane Doe", ""));
        assert_eq!(draft.guests[1], Guest::new("", "vegan"));
    }

    #[test]
    fn test_update_guest_out_of_bounds_is_noop() {
        let mut draft = RsvpDraft::new();
        draft.update_guest(5, GuestField::Name, "Ghost");
        assert_eq!(draft, RsvpDraft::new());
    }

    #[test]
    fn test_submittable_requires_primary_guest_name() {
        let mut draft = RsvpDraft::new();
        draft.update_guest(0, GuestField::Name, "   ");
        assert!(!draft.is_submittable());

        draft.update_guest(0, GuestField::Name, "Jane Doe");
        assert!(draft.is_submittable());
    }
}
