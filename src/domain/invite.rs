//! Heuristic field extraction from pasted calendar invites
//!
//! Best-effort parsing: subject/title lines become the company guess,
//! attendee-ish lines are collected verbatim, and the first "NN minutes"
//! match becomes the duration. Anything unrecognized is simply left unset.

use serde::Serialize;

const MIN_DURATION_MINUTES: u32 = 15;
const MAX_DURATION_MINUTES: u32 = 180;
const MAX_COMPANY_CHARS: usize = 120;

/// Fields recovered from an invite, all optional
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InviteFields {
    pub company: Option<String>,
    pub attendees: Vec<String>,
    pub duration_minutes: Option<u32>,
}

/// Extract form fields from raw invite or ICS text
pub fn parse_invite(text: &str) -> InviteFields {
    let mut fields = InviteFields::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();

        if fields.company.is_none() && (lower.starts_with("subject:") || lower.starts_with("title:"))
        {
            let value = trimmed
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or("");
            if !value.is_empty() {
                fields.company = Some(value.chars().take(MAX_COMPANY_CHARS).collect());
            }
        }

        if ["attendees", "participants", "with:"]
            .iter()
            .any(|token| lower.contains(token))
        {
            fields.attendees.push(trimmed.to_string());
        }

        if fields.duration_minutes.is_none() {
            fields.duration_minutes = extract_duration(&lower);
        }
    }

    fields
}

/// Find "NN min/mins/minutes" in a lowercased line
fn extract_duration(line: &str) -> Option<u32> {
    if !["duration", "minutes", "mins", "min"]
        .iter()
        .any(|token| line.contains(token))
    {
        return None;
    }

    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            // At most three digits, followed (after spaces) by a minute unit
            if i - start <= 3 {
                let rest = line[i..].trim_start();
                if rest.starts_with("minutes") || rest.starts_with("mins") || rest.starts_with("min")
                {
                    if let Ok(value) = line[start..i].parse::<u32>() {
                        return Some(value.clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES));
                    }
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_company_from_subject() {
        let fields = parse_invite("Subject: Acme Q3 Renewal\nLocation: Zoom");
        assert_eq!(fields.company.as_deref(), Some("Acme Q3 Renewal"));
    }

    #[test]
    fn test_title_line_also_matches() {
        let fields = parse_invite("Title: Kickoff with Globex");
        assert_eq!(fields.company.as_deref(), Some("Kickoff with Globex"));
    }

    #[test]
    fn test_collects_attendee_lines() {
        let fields = parse_invite("Participants: Dana, Lee\nAttendees listed below\nAgenda: TBD");
        assert_eq!(fields.attendees.len(), 2);
        assert!(fields.attendees[0].contains("Dana"));
    }

    #[test]
    fn test_duration_parse_and_clamp() {
        assert_eq!(
            parse_invite("Duration: 45 minutes").duration_minutes,
            Some(45)
        );
        assert_eq!(parse_invite("runs 5 mins").duration_minutes, Some(15));
        assert_eq!(
            parse_invite("Duration: 600 minutes").duration_minutes,
            Some(180)
        );
    }

    #[test]
    fn test_no_fields_found() {
        let fields = parse_invite("Hello there\nNothing useful here");
        assert_eq!(fields, InviteFields::default());
    }

    #[test]
    fn test_company_capped_at_120_chars() {
        let long = format!("Subject: {}", "x".repeat(500));
        let fields = parse_invite(&long);
        assert_eq!(fields.company.unwrap().chars().count(), 120);
    }
}
