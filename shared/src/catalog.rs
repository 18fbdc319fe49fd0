//! # Reference Data
//!
//! Fixed, compile-time content shared by both layouts: the merch catalog, the
//! leaderboard, the nearby-object cards, the space games and the daily quiz.
//!
//! Nothing in this module is ever mutated. Session state only ever holds
//! `&'static` references into these tables, so a cart entry always points at
//! the same record the shop renders.

use serde::Serialize;

/// Stable space game identifier.
pub type GameId = u32;

/// A merchandise record purchasable by cash price or point price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: &'static str,
    /// Cash price in whole dollars
    pub price: u32,
    /// Redemption cost in quiz points
    pub points: u32,
    pub image: &'static str,
}

/// Read-only leaderboard row. Not affected by the local score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub points: u32,
    pub avatar: &'static str,
}

impl LeaderboardEntry {
    /// CSS colour for the points column: `hsl(points / 10, 70%, 60%)`.
    ///
    /// ```rust
    /// use shared::catalog::LEADERBOARD;
    ///
    /// assert_eq!(LEADERBOARD[0].points_color(), "hsl(125, 70%, 60%)");
    /// ```
    pub fn points_color(&self) -> String {
        let hue = f64::from(self.points) / 10.0;
        format!("hsl({}, 70%, 60%)", hue)
    }
}

/// Accordion card in the "Nearby Space Objects" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NearbyObject {
    pub name: &'static str,
    pub distance: &'static str,
    pub description: &'static str,
}

/// Entry in the "Space Games" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceGame {
    pub id: GameId,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub preview: &'static str,
}

pub static CATALOG: [CatalogItem; 3] = [
    CatalogItem {
        id: 1,
        name: "Space Shuttle T-Shirt",
        price: 25,
        points: 50,
        image: "/assets/merch/camiseta_nasa.png",
    },
    CatalogItem {
        id: 2,
        name: "Asteroid Mug",
        price: 15,
        points: 30,
        image: "/assets/merch/taza_nasa.png",
    },
    CatalogItem {
        id: 3,
        name: "Planet Sticker Set",
        price: 10,
        points: 20,
        image: "/assets/merch/stickers_nasa.png",
    },
];

pub static LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry { name: "AstroNinja", points: 1250, avatar: "https://avatar.iran.liara.run/public/1" },
    LeaderboardEntry { name: "CosmicQueen", points: 980, avatar: "https://avatar.iran.liara.run/public/2" },
    LeaderboardEntry { name: "StarGazer42", points: 875, avatar: "https://avatar.iran.liara.run/public/3" },
    LeaderboardEntry { name: "NebulaNomad", points: 720, avatar: "https://avatar.iran.liara.run/public/4" },
    LeaderboardEntry { name: "GalacticPioneer", points: 650, avatar: "https://avatar.iran.liara.run/public/5" },
];

pub static NEARBY_OBJECTS: [NearbyObject; 3] = [
    NearbyObject {
        name: "Asteroid 2023 XY",
        distance: "1.2km",
        description: "This asteroid is about the size of 3 Empire State Buildings stacked on top of each other. Its mass is equivalent to approximately 7,000 blue whales!",
    },
    NearbyObject {
        name: "Comet Swift-Tuttle",
        distance: "26km",
        description: "This comet is as wide as the island of Manhattan. Its mass is comparable to about 500 million Statues of Liberty!",
    },
    NearbyObject {
        name: "NEO 2021 PDC",
        distance: "0.8km",
        description: "This Near Earth Object is about twice the size of the Eiffel Tower. Its weight is equivalent to approximately 34,000 Opel Corsa cars!",
    },
];

pub static SPACE_GAMES: [SpaceGame; 3] = [
    SpaceGame {
        id: 1,
        name: "Explora Marte",
        description: "Explora la superficie de Marte y descubre sus secretos.",
        image: "/assets/games/icono_vortex.jpeg",
        preview: "/assets/games/icono_vortex.jpeg",
    },
    SpaceGame {
        id: 2,
        name: "Identifica los Planetas",
        description: "Pon a prueba tus conocimientos sobre los planetas del sistema solar.",
        image: "/assets/games/icono_planeta.jpeg",
        preview: "/assets/games/icono_planeta.jpeg",
    },
    SpaceGame {
        id: 3,
        name: "Construye tu Estación Espacial",
        description: "Diseña y construye tu propia estación espacial.",
        image: "/assets/games/icono_satelite.jpeg",
        preview: "/assets/games/icono_satelite.jpeg",
    },
];

/// Daily quiz question text.
pub const QUIZ_QUESTION: &str =
    "How do you think would be the best way to deal with an asteroid that's going to destroy Earth?";

/// The three options offered, in display order.
pub const QUIZ_OPTIONS: [&str; 3] = ["Nuke it", "Redirect its trajectory", "Build a giant shield"];

/// The designated correct option.
pub const CORRECT_ANSWER: &str = "Redirect its trajectory";

pub const CORRECT_FEEDBACK: &str = "Correct! Redirecting the asteroid's trajectory is generally considered the safest and most effective method.";
pub const INCORRECT_FEEDBACK: &str = "Not quite. Redirecting the asteroid's trajectory is generally considered the safest and most effective method.";

/// Starting value of the simulated live viewer counter.
pub const INITIAL_VIEWER_COUNT: i64 = 1234;

/// Look up a space game by id.
pub fn space_game(id: GameId) -> Option<&'static SpaceGame> {
    SPACE_GAMES.iter().find(|game| game.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_prices_positive() {
        let ids: HashSet<_> = CATALOG.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        assert!(CATALOG.iter().all(|item| item.price > 0 && item.points > 0));
    }

    #[test]
    fn test_correct_answer_is_offered() {
        assert!(QUIZ_OPTIONS.contains(&CORRECT_ANSWER));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(space_game(3).map(|game| game.name), Some("Construye tu Estación Espacial"));
        assert!(space_game(0).is_none());
    }

    #[test]
    fn test_points_color() {
        assert_eq!(LEADERBOARD[1].points_color(), "hsl(98, 70%, 60%)");
        assert_eq!(LEADERBOARD[2].points_color(), "hsl(87.5, 70%, 60%)");
    }

    #[test]
    fn test_catalog_item_json_shape() {
        let json = serde_json::to_value(CATALOG[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Space Shuttle T-Shirt");
        assert_eq!(json["price"], 25);
        assert_eq!(json["points"], 50);
    }
}
