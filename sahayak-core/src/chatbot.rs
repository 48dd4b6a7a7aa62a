use crate::model::{ChatMessage, Sender};
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use std::fmt::Display;

pub struct CannedReply {
    pub text: &'static str,
    pub quick_replies: &'static [&'static str],
}

const MAIN_MENU: &[&str] = &[
    "Report an Issue",
    "Check Issue Status",
    "Emergency Contact",
    "How to Use App",
];

pub const GREETING: CannedReply = CannedReply {
    text: "Hello! I'm here to help you with civic issues and reporting. How can I assist you today?",
    quick_replies: MAIN_MENU,
};

/// Keyword table, matched in order.
pub const RESPONSES: &[(&str, CannedReply)] = &[
    (
        "report an issue",
        CannedReply {
            text: "I can help you report a civic issue! You can:\n\n• Use the \"Report Issue\" page for detailed reporting\n• Try voice reporting for hands-free submission\n• Report anonymously if needed\n• Add photos and location data\n\nWould you like me to guide you through the process?",
            quick_replies: &["Guide Me", "Anonymous Reporting", "Voice Reporting", "Upload Photos"],
        },
    ),
    (
        "check issue status",
        CannedReply {
            text: "To check your issue status:\n\n• Go to \"My Issues\" to see all your reports\n• Each issue shows current status and timeline\n• You'll receive notifications for updates\n• Contact details are provided for follow-up\n\nWould you like to see your recent reports?",
            quick_replies: &["View My Issues", "Track Specific Issue", "Set Notifications"],
        },
    ),
    (
        "emergency contact",
        CannedReply {
            text: "For emergencies, please use:\n\n🚨 Emergency: 911\n🚒 Fire Department: (555) 0123\n👮 Police Non-Emergency: (555) 0456\n🏥 Medical Emergency: 911\n💧 Water Emergency: (555) 0789\n⚡ Power Outage: (555) 0012\n\nFor urgent civic issues, use our Emergency Reporting feature.",
            quick_replies: &["Emergency Reporting", "More Contacts", "Back to Main"],
        },
    ),
    (
        "how to use app",
        CannedReply {
            text: "Here's how to use CitizenConnect:\n\n📋 Dashboard: Overview of your reports and community activity\n📝 Report Issue: Submit new civic issues\n🗺️ Map View: See issues in your area\n👥 Community: Validate and discuss issues\n📊 Transparency: Track city performance\n\nWhat would you like to learn more about?",
            quick_replies: &["Reporting Process", "Community Features", "Map Navigation", "Getting Started"],
        },
    ),
    (
        "guide me",
        CannedReply {
            text: "Let me guide you through reporting an issue:\n\n1. Click \"Report Issue\" in the sidebar\n2. Choose your issue category\n3. Add a clear title and description\n4. Select priority level\n5. Add photos if available\n6. Confirm your location\n7. Choose anonymous option if needed\n8. Submit your report\n\nReady to start?",
            quick_replies: &["Start Reporting", "Anonymous Reporting Info", "Photo Guidelines"],
        },
    ),
    (
        "anonymous reporting",
        CannedReply {
            text: "Anonymous reporting protects your privacy:\n\n✓ Your identity is not shared with officials\n✓ Reports are still tracked and acted upon\n✓ Updates sent to secure notification system\n✓ Community can still validate the issue\n\nYour privacy is completely protected while helping your community!",
            quick_replies: &["Start Anonymous Report", "Privacy Policy", "Back to Reporting"],
        },
    ),
    (
        "voice reporting",
        CannedReply {
            text: "Voice reporting makes it easy to report on-the-go:\n\n🎤 Speak naturally in your preferred language\n🌍 Supports 12+ languages\n📝 Automatically transcribed to text\n✏️ You can edit before submitting\n🔊 Playback to verify accuracy\n\nPerfect for when you can't type!",
            quick_replies: &["Try Voice Reporting", "Supported Languages", "Voice Tips"],
        },
    ),
];

pub static FALLBACKS: [CannedReply; 2] = [
    CannedReply {
        text: "I understand you need help with that. Here are some things I can assist you with:",
        quick_replies: MAIN_MENU,
    },
    CannedReply {
        text: "I'm here to help! You can ask me about reporting issues, checking status, emergency contacts, or how to use the app.",
        quick_replies: &["Report an Issue", "View My Issues", "Get Help", "Contact Support"],
    },
];

/// Pick the canned reply for `input`: the first keyword contained in the
/// lower-cased input, else a random fallback.
pub fn respond<R: Rng + ?Sized>(input: &str, rng: &mut R) -> &'static CannedReply {
    let lower = input.to_lowercase();
    if let Some((_, reply)) = RESPONSES.iter().find(|(key, _)| lower.contains(key)) {
        return reply;
    }
    &FALLBACKS[rng.gen_range(0..FALLBACKS.len())]
}

pub fn format_time<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format("%H:%M").to_string()
}

#[derive(Clone, Debug)]
pub struct Chatbot {
    pub messages: Vec<ChatMessage>,
    /// True while at least one sent message is still waiting for its answer.
    pub typing: bool,
    pub minimized: bool,
    pending: usize,
    next_id: u64,
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Chatbot {
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut bot = Self {
            messages: Vec::new(),
            typing: false,
            minimized: false,
            pending: 0,
            next_id: 1,
        };
        bot.push(Sender::Bot, GREETING.text, GREETING.quick_replies, now);
        bot
    }

    fn push(&mut self, sender: Sender, text: &str, quick_replies: &[&str], now: DateTime<Utc>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text: text.to_string(),
            timestamp: now,
            quick_replies: quick_replies.iter().map(|r| r.to_string()).collect(),
        });
        self.next_id += 1;
    }

    /// Append the user's message and start "typing". Returns the text that
    /// was sent, to be passed to [`Chatbot::reply`] later, or `None` for
    /// blank input, which is not sent.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Sender::User, text, &[], now);
        self.pending += 1;
        self.typing = true;
        Some(text.to_string())
    }

    /// Append the bot's answer to `question`. Every sent message gets its
    /// own reply, in the order the replies arrive.
    pub fn reply<R: Rng + ?Sized>(&mut self, question: &str, rng: &mut R, now: DateTime<Utc>) {
        let answer = respond(question, rng);
        self.push(Sender::Bot, answer.text, answer.quick_replies, now);
        self.pending = self.pending.saturating_sub(1);
        self.typing = self.pending > 0;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 11, h, m, 0).unwrap()
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(7);
        let reply = respond("Please GUIDE ME through it", &mut rng);
        assert!(reply.text.starts_with("Let me guide you"));
    }

    #[test]
    fn first_matching_key_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        let reply = respond("voice reporting or report an issue?", &mut rng);
        assert_eq!(reply.text, RESPONSES[0].1.text);
    }

    #[test]
    fn unknown_input_uses_a_fallback() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let reply = respond("what is the weather", &mut rng);
            assert!(FALLBACKS.iter().any(|f| f.text == reply.text));
        }
    }

    #[test]
    fn conversation_appends_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bot = Chatbot::new(at(9, 0));
        assert_eq!(bot.messages.len(), 1);
        assert_eq!(bot.send("  ", at(9, 1)), None);
        let sent = bot.send("Emergency Contact", at(9, 1)).expect("sent");
        assert!(bot.typing);
        bot.reply(&sent, &mut rng, at(9, 2));
        assert!(!bot.typing);
        assert_eq!(bot.messages.len(), 3);
        assert_eq!(bot.messages[1].sender, Sender::User);
        assert_eq!(bot.messages[2].sender, Sender::Bot);
        assert!(bot.messages[2].text.contains("911"));
        assert!(bot.messages.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(format_time(&bot.messages[2].timestamp), "09:02");
    }

    #[test]
    fn each_message_gets_its_own_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bot = Chatbot::new(at(9, 0));
        let first = bot.send("emergency contact", at(9, 1)).expect("first");
        let second = bot.send("guide me", at(9, 1)).expect("second");

        bot.reply(&first, &mut rng, at(9, 2));
        assert!(bot.typing);
        bot.reply(&second, &mut rng, at(9, 2));
        assert!(!bot.typing);

        let answers: Vec<_> = bot.messages[3..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(answers.len(), 2);
        assert!(answers[0].contains("911"));
        assert!(answers[1].starts_with("Let me guide you"));
    }
}
