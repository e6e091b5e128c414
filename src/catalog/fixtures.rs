use chrono::NaiveDate;

use super::Catalog;
use crate::models::{PlanDetails, RecommendationBundle, Review, User, WatchEvent};

const NEXT_PAYMENT: NaiveDate = match NaiveDate::from_ymd_opt(2025, 11, 1) {
    Some(date) => date,
    None => panic!("invalid fixture payment date"),
};

// (id, name, email, secret, age)
const USERS: [(u32, &str, &str, &str, u8); 10] = [
    (1, "John Doe", "john@example.com", "password123", 28),
    (2, "Jane Smith", "jane.smith@example.com", "password456", 34),
    (3, "Emily Brown", "emily@example.com", "password789", 22),
    (4, "Michael Johnson", "michael.johnson@example.com", "password000", 30),
    (5, "Sarah Williams", "sarah@example.com", "password111", 25),
    (6, "David Miller", "david.miller@example.com", "password222", 40),
    (7, "Olivia Davis", "olivia.davis@example.com", "password333", 33),
    (8, "Lucas Martinez", "lucas.martinez@example.com", "password444", 27),
    (9, "Sophia Garcia", "sophia@example.com", "password555", 38),
    (10, "Ethan Lee", "ethan.lee@example.com", "password666", 29),
];

// (user, content, rating)
const REVIEWS: [(u32, u32, u8); 10] = [
    (1, 201, 4),
    (2, 202, 5),
    (3, 203, 3),
    (4, 204, 2),
    (5, 205, 5),
    (6, 206, 4),
    (7, 207, 4),
    (8, 208, 3),
    (9, 209, 4),
    (10, 210, 4),
];

// (user, content, progress)
const WATCH_HISTORY: [(u32, u32, u8); 10] = [
    (1, 201, 100),
    (2, 202, 80),
    (3, 203, 50),
    (4, 204, 20),
    (5, 205, 100),
    (6, 206, 30),
    (7, 207, 100),
    (8, 208, 60),
    (9, 209, 90),
    (10, 210, 40),
];

const GENRES: [&str; 10] = [
    "Action", "Drama", "Comedy", "Horror", "Romance", "Action", "Drama", "Comedy", "Horror",
    "Romance",
];

// (plan, amount paid, perks, device)
const PLANS: [(&str, f64, &str, &str); 10] = [
    ("Basic", 39.96, "Ads", "Mobile"),
    ("Standard", 44.97, "HD", "Laptop"),
    ("Basic", 39.96, "Ads", "Tablet"),
    ("Premium", 59.97, "Ultra HD + Offline", "Smart TV"),
    ("Basic", 39.96, "Ads", "Laptop"),
    ("Standard", 44.97, "HD", "Mobile"),
    ("Premium", 59.97, "Ultra HD + Offline", "Smart TV"),
    ("Basic", 39.96, "Ads", "Tablet"),
    ("Standard", 44.97, "HD", "Laptop"),
    ("Premium", 59.97, "Ultra HD + Offline", "Smart TV"),
];

pub(super) fn load() -> Catalog {
    let mut catalog = Catalog::empty();

    for (id, name, email, secret, age) in USERS {
        catalog = catalog.with_user(User::new(id, name, email, secret, age));
    }
    for (user_id, content_id, rating) in REVIEWS {
        catalog = catalog.with_review(Review { user_id, content_id, rating });
    }
    for (user_id, content_id, progress) in WATCH_HISTORY {
        catalog = catalog.with_watch(WatchEvent { user_id, content_id, progress });
    }
    for ((id, ..), genre) in USERS.iter().zip(GENRES) {
        catalog = catalog.with_genre(*id, genre);
    }
    for ((id, ..), (plan, amount_paid, perks, device_type)) in USERS.iter().zip(PLANS) {
        catalog = catalog.with_plan(
            *id,
            PlanDetails {
                plan: plan.to_string(),
                amount_paid,
                perks: perks.to_string(),
                next_payment_date: NEXT_PAYMENT,
                device_type: device_type.to_string(),
            },
        );
    }

    for (user_id, bundle) in bundles() {
        catalog = catalog.with_bundle(user_id, bundle);
    }

    catalog
}

fn bundles() -> Vec<(u32, RecommendationBundle)> {
    vec![
        (
            1,
            RecommendationBundle::new(
                "Shadow Protocol",
                "Will Smith",
                ["Crimson Vengeance", "The Hollow Manor", "Hearts Entwined"],
                ["Men in Black", "I Am Legend", "Gemini Man"],
            ),
        ),
        (
            2,
            RecommendationBundle::new(
                "Echoes of Silence",
                "Meryl Streep",
                ["Forever and Always", "Whispers in the Dark", "Accidentally Perfect"],
                ["The Iron Lady", "Kramer vs Kramer", "The Devil Wears Prada"],
            ),
        ),
        (
            3,
            RecommendationBundle::new(
                "Laugh Lines",
                "Jim Carrey",
                ["Accidentally Perfect", "Whispers in the Dark", "Forever and Always"],
                ["The Mask", "Ace Ventura", "Dumb and Dumber"],
            ),
        ),
        (
            4,
            RecommendationBundle::new(
                "The Haunted Hour",
                "Jamie Lee Curtis",
                ["Crimson Vengeance", "Whispers in the Dark", "The Hollow Manor"],
                ["Halloween", "Freaky Friday", "True Lies"],
            ),
        ),
        (
            5,
            RecommendationBundle::new(
                "Hearts Entwined",
                "Julia Roberts",
                ["Forever and Always", "The Hollow Manor", "Accidentally Perfect"],
                ["Pretty Woman", "Erin Brockovich", "My Best Friend's Wedding"],
            ),
        ),
        (
            6,
            RecommendationBundle::new(
                "Gemini Force",
                "Tom Hanks",
                ["Shadow Protocol", "Laugh Lines", "Crimson Vengeance"],
                ["Forrest Gump", "Cast Away", "Saving Private Ryan"],
            ),
        ),
        (
            7,
            RecommendationBundle::new(
                "Forever and Always",
                "Emma Stone",
                ["Hearts Entwined", "Accidentally Perfect", "The Hollow Manor"],
                ["La La Land", "Easy A", "The Favourite"],
            ),
        ),
        (
            8,
            RecommendationBundle::new(
                "Accidentally Perfect",
                "Leonardo DiCaprio",
                ["Shadow Protocol", "Laugh Lines", "Forever and Always"],
                ["Inception", "Titanic", "The Revenant"],
            ),
        ),
        (
            9,
            RecommendationBundle::new(
                "Whispers in the Dark",
                "Scarlett Johansson",
                ["Echoes of Silence", "Hearts Entwined", "Accidentally Perfect"],
                ["Lucy", "Marriage Story", "Lost in Translation"],
            ),
        ),
        (
            10,
            RecommendationBundle::new(
                "Crimson Vengeance",
                "Brad Pitt",
                ["Shadow Protocol", "Gemini Force", "Laugh Lines"],
                ["Fight Club", "World War Z", "Once Upon a Time in Hollywood"],
            ),
        ),
    ]
}
