//! Integration tests for complete conversations.
//!
//! Drives `ConversationSession` through the Telegram dispatcher with mock
//! providers and a recording sender, checking exactly what each chat sees.

use std::sync::Arc;
use std::time::Duration;

use prayer_times_bot::adapters::{
    InMemorySessionStore, MockGeocoder, MockGeocoderError, MockPrayerTimesError,
    MockPrayerTimesProvider, RecordingMessageSender, UpdateDispatcher,
};
use prayer_times_bot::adapters::telegram::Envelope;
use prayer_times_bot::application::{ConversationSession, LocationResolver, PrayerTimeClient};
use prayer_times_bot::domain::conversation::{InboundEvent, MessageFormatter, ReplyMarkup};
use prayer_times_bot::domain::foundation::{ChatId, UserId};
use prayer_times_bot::domain::location::Coordinates;
use prayer_times_bot::ports::GeocodedPlace;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Bot {
    geocoder: MockGeocoder,
    provider: MockPrayerTimesProvider,
    sender: RecordingMessageSender,
    dispatcher: UpdateDispatcher,
}

impl Bot {
    fn new(geocoder: MockGeocoder, provider: MockPrayerTimesProvider) -> Self {
        let session = ConversationSession::new(
            Arc::new(LocationResolver::new(Arc::new(geocoder.clone()))),
            Arc::new(PrayerTimeClient::new(Arc::new(provider.clone()))),
            Arc::new(InMemorySessionStore::new()),
        );
        let sender = RecordingMessageSender::new();
        let dispatcher = UpdateDispatcher::new(
            Arc::new(session),
            Arc::new(sender.clone()),
            Duration::from_secs(60),
        );
        Self {
            geocoder,
            provider,
            sender,
            dispatcher,
        }
    }

    fn send(&mut self, user: i64, event: InboundEvent) {
        self.dispatcher.dispatch(Envelope {
            user_id: UserId::new(user),
            chat_id: ChatId::new(user),
            event,
        });
    }

    fn text(&mut self, user: i64, text: &str) {
        self.send(user, InboundEvent::Text(text.to_string()));
    }

    /// Waits for every queued round and returns the recorder.
    async fn finish(self) -> (MockGeocoder, MockPrayerTimesProvider, RecordingMessageSender) {
        self.dispatcher.shutdown().await;
        (self.geocoder, self.provider, self.sender)
    }
}

fn paris() -> GeocodedPlace {
    GeocodedPlace::new(Coordinates::new(48.8566, 2.3522).unwrap()).with_address("Paris, France")
}

fn london() -> GeocodedPlace {
    GeocodedPlace::new(Coordinates::new(51.5074, -0.1278).unwrap())
        .with_address("London, Greater London, England, United Kingdom")
}

fn known_places() -> MockGeocoder {
    MockGeocoder::new()
        .with_place("Paris, France", paris())
        .with_place("London", london())
}

const PARIS_REPORT: &str = "Prayer Times for Paris, France:\n\n\
    Fajr: 05:00\n\
    Sunrise: 06:30\n\
    Dhuhr: 12:15\n\
    Asr: 15:45\n\
    Maghrib: 18:20\n\
    Isha: 19:50\n";

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn start_then_city_name_reports_and_reprompts() {
    let mut bot = Bot::new(known_places(), MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.text(1, "Paris, France");
    let (_, provider, sender) = bot.finish().await;

    let sent = sender.sent();
    assert_eq!(sent.len(), 3);

    assert_eq!(sent[0].1.text, MessageFormatter::welcome());
    assert_eq!(sent[0].1.markup, ReplyMarkup::RequestLocation);

    assert_eq!(sent[1].1.text, PARIS_REPORT);
    assert_eq!(sent[1].1.markup, ReplyMarkup::RemoveKeyboard);
    assert!(!sent[1].1.text.contains("Imsak"));

    assert_eq!(sent[2].1.text, MessageFormatter::location_prompt());
    assert_eq!(sent[2].1.markup, ReplyMarkup::RequestLocation);

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, paris().coordinates);
}

#[tokio::test]
async fn unknown_place_gets_guidance_and_no_timings_request() {
    let mut bot = Bot::new(known_places(), MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.text(1, "Zzznotacity");
    let (geocoder, provider, sender) = bot.finish().await;

    assert_eq!(
        sender.texts_for(ChatId::new(1)),
        vec![
            MessageFormatter::welcome(),
            MessageFormatter::not_found(),
            MessageFormatter::location_prompt(),
        ]
    );
    assert_eq!(geocoder.forward_calls(), vec!["Zzznotacity"]);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn geocoder_outage_reads_as_not_found() {
    let geocoder = MockGeocoder::new().with_error(MockGeocoderError::Timeout { timeout_secs: 10 });
    let mut bot = Bot::new(geocoder, MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.text(1, "Paris, France");
    let (_, provider, sender) = bot.finish().await;

    assert_eq!(sender.texts_for(ChatId::new(1))[1], MessageFormatter::not_found());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn shared_location_without_reverse_match_uses_placeholder() {
    let geocoder = MockGeocoder::new().with_error(MockGeocoderError::Network {
        message: "unreachable".to_string(),
    });
    let nyc = Coordinates::new(40.7128, -74.0060).unwrap();

    let mut bot = Bot::new(geocoder, MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.send(1, InboundEvent::LocationShared(nyc));
    let (geocoder, provider, sender) = bot.finish().await;

    let texts = sender.texts_for(ChatId::new(1));
    assert!(texts[1].starts_with("Prayer Times for Unknown City:\n\n"));
    assert_eq!(geocoder.reverse_calls(), vec![nyc]);
    assert_eq!(provider.get_calls()[0].0, nyc);
}

#[tokio::test]
async fn consecutive_rounds_do_not_leak_into_each_other() {
    let provider = MockPrayerTimesProvider::new()
        .with_schedule(MockPrayerTimesProvider::schedule_from(&[("Fajr", "04:10")]))
        .with_schedule(MockPrayerTimesProvider::schedule_from(&[("Fajr", "05:55")]));

    let mut bot = Bot::new(known_places(), provider);
    bot.send(1, InboundEvent::Start);
    bot.text(1, "London");
    bot.text(1, "Paris, France");
    let (_, _, sender) = bot.finish().await;

    let texts = sender.texts_for(ChatId::new(1));
    assert_eq!(texts.len(), 5);

    assert!(texts[1].starts_with("Prayer Times for London, Greater London"));
    assert!(texts[1].contains("Fajr: 04:10\n"));

    assert!(texts[3].starts_with("Prayer Times for Paris, France:"));
    assert!(texts[3].contains("Fajr: 05:55\n"));
    assert!(!texts[3].contains("London"));
    assert!(!texts[3].contains("04:10"));
}

#[tokio::test]
async fn blank_text_only_asks_for_valid_input() {
    let mut bot = Bot::new(known_places(), MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.text(1, "   ");
    let (geocoder, provider, sender) = bot.finish().await;

    assert_eq!(
        sender.texts_for(ChatId::new(1)),
        vec![MessageFormatter::welcome(), MessageFormatter::empty_input()]
    );
    assert!(geocoder.forward_calls().is_empty());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn timings_outage_apologises_and_reprompts() {
    let provider = MockPrayerTimesProvider::new().with_error(MockPrayerTimesError::Status { status: 503 });
    let mut bot = Bot::new(known_places(), provider);
    bot.send(1, InboundEvent::Start);
    bot.text(1, "London");
    let (_, _, sender) = bot.finish().await;

    assert_eq!(
        sender.texts_for(ChatId::new(1)),
        vec![
            MessageFormatter::welcome(),
            MessageFormatter::unavailable(),
            MessageFormatter::location_prompt(),
        ]
    );
}

#[tokio::test]
async fn sessions_are_independent_per_user() {
    let mut bot = Bot::new(known_places(), MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.text(2, "Paris, France");
    bot.text(1, "Paris, France");
    bot.send(2, InboundEvent::Help);
    let (geocoder, _, sender) = bot.finish().await;

    assert_eq!(sender.texts_for(ChatId::new(1)).len(), 3);
    assert_eq!(sender.texts_for(ChatId::new(2)), vec![MessageFormatter::help()]);
    assert_eq!(geocoder.forward_calls().len(), 1);
}

#[tokio::test]
async fn restart_mid_session_welcomes_again() {
    let mut bot = Bot::new(known_places(), MockPrayerTimesProvider::new());
    bot.send(1, InboundEvent::Start);
    bot.send(1, InboundEvent::Start);
    bot.text(1, "Paris, France");
    let (_, _, sender) = bot.finish().await;

    let texts = sender.texts_for(ChatId::new(1));
    assert_eq!(texts[0], MessageFormatter::welcome());
    assert_eq!(texts[1], MessageFormatter::welcome());
    assert_eq!(texts[2], PARIS_REPORT);
}
