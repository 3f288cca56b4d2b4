//! Drive a session over simulated tracks and switch languages mid-play.
//!
//! Run with `RUST_LOG=debug cargo run --example switching_demo`.

use std::time::Duration;

use dubplay::{Language, PlayerConfig, PlayerSession, Segment, SimTrack};

fn seg(
    start: f64,
    end: f64,
    start_secondary: f64,
    end_secondary: f64,
    speaker: &str,
    text_primary: &str,
    text_secondary: &str,
) -> Segment {
    Segment {
        start,
        end,
        duration: end - start,
        speaker: speaker.to_string(),
        text_primary: text_primary.to_string(),
        text_secondary: text_secondary.to_string(),
        start_secondary: Some(start_secondary),
        end_secondary: Some(end_secondary),
        duration_secondary: Some(end_secondary - start_secondary),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let segments = vec![
        seg(0.0, 4.0, 0.0, 6.0, "SPEAKER_00", "Welcome to the show.", "Bienvenidos al programa."),
        seg(5.0, 9.0, 7.0, 12.5, "SPEAKER_01", "Thanks for having me.", "Gracias por invitarme."),
        seg(10.0, 14.0, 13.5, 18.0, "SPEAKER_00", "Let's get started.", "Empecemos."),
    ];

    let original = SimTrack::new(15.0);
    let translated = SimTrack::new(19.0);
    let mut session = PlayerSession::new(
        Box::new(original.clone()),
        Box::new(translated.clone()),
        segments,
        PlayerConfig::default(),
    );

    session.play();

    let mut elapsed: f64 = 0.0;
    while session.state().is_playing {
        original.advance(0.25);
        translated.advance(0.25);
        elapsed += 0.25;
        tokio::time::sleep(Duration::from_millis(250)).await;

        let state = session.state();
        let subtitle = session
            .active_subtitle()
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "[{}] t={:6.2}s / {:5.1}s  subtitle #{}",
            state.active_language.as_str(),
            state.current_time,
            state.duration,
            subtitle
        );

        // Flip to the original voices halfway through
        if (elapsed - 8.0).abs() < f64::EPSILON {
            println!("-- switching language --");
            session.switch_language(Language::Original);
        }
    }

    session.close();
}
