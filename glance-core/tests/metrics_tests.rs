use chrono::{DateTime, Duration, TimeZone, Utc};
use glance_core::{compute_metrics, days_active, Flashcard, MetricsSummary};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
}

fn card(seen: u32, hard: u32, easy: u32, last_seen: Option<DateTime<Utc>>) -> Flashcard {
    let mut c = Flashcard::new("Haus", "house", now() - Duration::days(60));
    c.is_new = seen == 0;
    c.seen_count = seen;
    c.hard_count = hard;
    c.easy_count = easy;
    c.last_seen_date = last_seen;
    c
}

#[test]
fn empty_deck_is_all_zero() {
    let m = compute_metrics(&[], now());
    assert_eq!(m, MetricsSummary::default());
    assert_eq!(m.average_daily_reviews, 0.0);
    assert_eq!(days_active(&[], now()), 7);
}

#[test]
fn mastery_requires_volume_and_ratio() {
    assert!(card(7, 1, 6, None).is_mastered());
    assert!(!card(7, 2, 5, None).is_mastered());
    assert!(!card(4, 0, 4, None).is_mastered());
    assert!(card(5, 0, 5, None).is_mastered());
}

#[test]
fn re_hardened_ratio() {
    assert!(card(6, 4, 2, None).is_re_hardened());
    assert!(!card(10, 1, 9, None).is_re_hardened());
    assert!(!card(3, 3, 0, None).is_re_hardened());
    assert!(!card(3, 0, 3, None).is_re_hardened());
}

#[test]
fn mastered_percentage_rounds() {
    let deck = vec![
        card(7, 1, 6, None),
        card(0, 0, 0, None),
        card(2, 1, 1, None),
        card(3, 3, 0, None),
    ];
    let m = compute_metrics(&deck, now());
    assert_eq!(m.mastered_cards_count, 1);
    assert_eq!(m.mastered_cards_percentage, 25);

    let thirds = vec![card(5, 0, 5, None), card(0, 0, 0, None), card(0, 0, 0, None)];
    assert_eq!(compute_metrics(&thirds, now()).mastered_cards_percentage, 33);
}

#[test]
fn full_summary() {
    let day = Duration::days(1);
    let deck = vec![
        card(8, 1, 6, Some(now() - day * 3)),
        card(10, 0, 10, Some(now() - day)),
        card(6, 4, 2, Some(now() - day * 2)),
        card(2, 2, 0, Some(now() - Duration::hours(5))),
        card(0, 0, 0, None),
    ];
    let m = compute_metrics(&deck, now());

    assert_eq!(m.total_cards_in_deck, 5);
    assert_eq!(m.mastered_cards_count, 2);
    assert_eq!(m.mastered_cards_percentage, 40);
    assert_eq!(m.new_cards_remaining, 1);
    assert!((m.avg_hard_attempts_per_mastered_card - 0.5).abs() < 1e-9);
    assert!((m.avg_seen_count_per_mastered_card - 9.0).abs() < 1e-9);
    assert_eq!(m.re_hardened_cards_count, 1);
    assert_eq!(m.current_hard_cards_count, 2);
    assert!((m.average_daily_reviews - 26.0 / 3.0).abs() < 1e-9);
}

#[test]
fn days_active_rounds_up_partial_days() {
    let deck = vec![card(4, 0, 4, Some(now() - Duration::hours(30)))];
    assert_eq!(days_active(&deck, now()), 2);
    let m = compute_metrics(&deck, now());
    assert!((m.average_daily_reviews - 2.0).abs() < 1e-9);

    let recent = vec![card(3, 0, 3, Some(now() - Duration::minutes(10)))];
    assert_eq!(days_active(&recent, now()), 1);
}

#[test]
fn days_active_counts_sub_millisecond_remainders() {
    let last = now() - Duration::days(1) - Duration::microseconds(500);
    let just_over = vec![card(2, 0, 2, Some(last))];
    assert_eq!(days_active(&just_over, now()), 2);

    let exact = vec![card(2, 0, 2, Some(now() - Duration::days(3)))];
    assert_eq!(days_active(&exact, now()), 3);
}

#[test]
fn unseen_deck_falls_back_to_a_week() {
    let deck = vec![card(0, 0, 0, None), card(0, 0, 0, None)];
    let m = compute_metrics(&deck, now());
    assert_eq!(days_active(&deck, now()), 7);
    assert_eq!(m.average_daily_reviews, 0.0);
    assert_eq!(m.new_cards_remaining, 2);
}

#[test]
fn future_last_seen_clamps_to_one_day() {
    let deck = vec![card(5, 0, 5, Some(now() + Duration::days(2)))];
    assert_eq!(days_active(&deck, now()), 1);
    assert!((compute_metrics(&deck, now()).average_daily_reviews - 5.0).abs() < 1e-9);
}
