//! Renderer: projects a [`Roster`] into display cards and selection options.
//!
//! Rendering is a pure function of the roster. Every call builds the view
//! from scratch; nothing is carried over from a previous render.

mod initials;

pub use initials::initials;

use askama::Template;

use crate::errors::Result;
use crate::models::{Activity, Roster};

/// What a removal affordance hands back to the unregister handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// One participant line on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub initials: String,
    pub remove: RemovalTarget,
}

/// A rendered activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    fn from_activity(activity: &Activity) -> Self {
        let participants = activity
            .details
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                initials: initials(email),
                remove: RemovalTarget {
                    activity: activity.name.clone(),
                    email: email.clone(),
                },
            })
            .collect();

        Self {
            name: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    /// Card markup with all server-provided text HTML-escaped.
    pub fn to_html(&self) -> Result<String> {
        Ok(ActivityCardTemplate { card: self }.render()?)
    }
}

#[derive(Template)]
#[template(path = "activity_card.html")]
struct ActivityCardTemplate<'a> {
    card: &'a ActivityCard,
}

/// An entry of the activity selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Output of one render pass. `options` always mirrors `cards` by name and
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRoster {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<SelectOption>,
}

/// Render every activity in roster order.
pub fn render(roster: &Roster) -> RenderedRoster {
    let cards: Vec<ActivityCard> = roster.iter().map(ActivityCard::from_activity).collect();
    let options = cards
        .iter()
        .map(|card| SelectOption {
            value: card.name.clone(),
            label: card.name.clone(),
        })
        .collect();

    tracing::debug!("Rendered {} activity cards", cards.len());
    RenderedRoster { cards, options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityDetails;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity::new(
            name,
            ActivityDetails {
                description: format!("{} description", name),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
    }

    fn roster(activities: Vec<Activity>) -> Roster {
        activities.into_iter().collect()
    }

    #[test]
    fn test_one_card_per_activity_with_raw_spots_left() {
        let roster = roster(vec![
            activity("Chess Club", 12, &["michael@mergington.edu", "daniel@mergington.edu"]),
            activity("Empty", 0, &[]),
            activity("Overbooked", 1, &["a@x.edu", "b@x.edu"]),
        ]);

        let rendered = render(&roster);

        assert_eq!(rendered.cards.len(), roster.len());
        let spots: Vec<i64> = rendered.cards.iter().map(|c| c.spots_left).collect();
        assert_eq!(spots, vec![10, 0, -1]);
    }

    #[test]
    fn test_options_mirror_cards_in_order() {
        let roster = roster(vec![
            activity("Zumba", 5, &[]),
            activity("Art Club", 5, &[]),
            activity("Math Olympiad", 5, &[]),
        ]);

        let rendered = render(&roster);

        let card_names: Vec<&str> = rendered.cards.iter().map(|c| c.name.as_str()).collect();
        let option_values: Vec<&str> = rendered.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(card_names, vec!["Zumba", "Art Club", "Math Olympiad"]);
        assert_eq!(option_values, card_names);
        assert!(rendered.options.iter().all(|o| o.label == o.value));
    }

    #[test]
    fn test_rows_carry_removal_target_and_initials() {
        let roster = roster(vec![activity("Gym Class", 30, &["john.doe@x.edu", "olivia@x.edu"])]);

        let card = &render(&roster).cards[0];

        assert_eq!(card.participants.len(), 2);
        assert_eq!(card.participants[0].initials, "JD");
        assert_eq!(card.participants[1].initials, "O");
        assert_eq!(
            card.participants[1].remove,
            RemovalTarget {
                activity: "Gym Class".to_string(),
                email: "olivia@x.edu".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_roster_renders_nothing() {
        let rendered = render(&Roster::default());
        assert!(rendered.cards.is_empty());
        assert!(rendered.options.is_empty());
    }

    #[test]
    fn test_card_markup() {
        let roster = roster(vec![activity("Chess Club", 10, &["alice@x.edu", "bob@x.edu"])]);
        let html = render(&roster).cards[0].to_html().unwrap();

        assert!(html.contains("<h4>Chess Club</h4>"));
        assert!(html.contains("8 spots left"));
        assert!(html.contains(r#"<span class="initials-badge">A</span>"#));
        assert_eq!(html.matches("delete-icon").count(), 2);
        assert!(!html.contains("No participants yet"));
    }

    #[test]
    fn test_empty_participants_placeholder() {
        let roster = roster(vec![activity("Drama Club", 20, &[])]);
        let html = render(&roster).cards[0].to_html().unwrap();

        assert!(html.contains("No participants yet"));
        assert!(!html.contains("participants-list"));
    }

    #[test]
    fn test_server_text_is_escaped() {
        let roster = roster(vec![Activity::new(
            "<script>alert(1)</script>",
            ActivityDetails {
                description: r#"Say "hi" & 'bye'"#.to_string(),
                schedule: "<b>now</b>".to_string(),
                max_participants: 2,
                participants: vec![r#"x"><img src=y onerror=alert(1)>@x.edu"#.to_string()],
            },
        )]);

        let html = render(&roster).cards[0].to_html().unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(html.contains("&quot;hi&quot; &amp; "));
        assert!(!html.contains("'bye'"));
    }
}
