//! Static catalog: tracks, categories, creators
//!
//! The catalog is read-only for the lifetime of the process. The built-in
//! data can be replaced wholesale by a JSON file with the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Display label only, never tied to the simulated progress
    pub duration: String,
    pub category: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub track_count: u32,
    pub gradient: String,
}

/// Artist card on the search screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewers: Option<String>,
    pub gradient: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewers: Option<String>,
    pub handle: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub gradient: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub days_active: u32,
    pub hours_listened: u32,
    pub streak: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub trending: Vec<Track>,
    #[serde(default)]
    pub playlist_tracks: Vec<Track>,
    #[serde(default)]
    pub creator_tracks: Vec<Track>,
    #[serde(default)]
    pub creators: Vec<CreatorProfile>,
    #[serde(default)]
    pub popular_searches: Vec<String>,
    #[serde(default)]
    pub search_categories: Vec<String>,
    #[serde(default)]
    pub suggested_artists: Vec<Artist>,
    pub user_stats: UserStats,
}

impl Catalog {
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if catalog.trending.is_empty() {
            return Err(CatalogError::Empty);
        }
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            tracks = catalog.all_tracks().count(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// The hero track on the home screen
    pub fn featured(&self) -> Option<&Track> {
        self.trending.first()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn creator(&self, id: &str) -> Option<&CreatorProfile> {
        self.creators.iter().find(|c| c.id == id)
    }

    /// Every track once, in catalog order
    pub fn all_tracks(&self) -> impl Iterator<Item = &Track> {
        let mut seen = std::collections::HashSet::new();
        self.trending
            .iter()
            .chain(&self.playlist_tracks)
            .chain(&self.creator_tracks)
            .filter(move |t| {
                let t: &Track = *t;
                seen.insert(t.id.as_str())
            })
    }

    /// Tracks credited to a creator. Creators with no credited tracks
    /// fall back to the generic creator library.
    pub fn tracks_for_creator(&self, id: &str) -> Vec<Track> {
        let matching: Vec<Track> = match self.creator(id) {
            Some(creator) => self
                .all_tracks()
                .filter(|t| t.artist.eq_ignore_ascii_case(&creator.name))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        if matching.is_empty() {
            self.creator_tracks.clone()
        } else {
            matching
        }
    }

    /// Tracks shown on a category's playlist screen. Categories with no
    /// matching tracks fall back to the generic playlist.
    pub fn tracks_for_category(&self, id: &str) -> Vec<Track> {
        let matching: Vec<Track> = match self.category(id) {
            Some(category) => self
                .all_tracks()
                .filter(|t| t.category.eq_ignore_ascii_case(&category.name))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        if matching.is_empty() {
            self.playlist_tracks.clone()
        } else {
            matching
        }
    }

    /// Case-insensitive search over title, artist and category, best match first
    pub fn search(&self, query: &str) -> Vec<Track> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u8, &Track)> = self
            .all_tracks()
            .filter_map(|t| {
                let score = [&t.title, &t.artist, &t.category]
                    .iter()
                    .map(|field| match_score(&field.to_lowercase(), &query))
                    .max()
                    .unwrap_or(0);
                (score > 0).then_some((score, t))
            })
            .collect();

        // Stable sort keeps catalog order within a score
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, t)| t.clone()).collect()
    }
}

fn match_score(field: &str, query: &str) -> u8 {
    if field == query {
        100
    } else if field.starts_with(query) {
        75
    } else if field.contains(query) {
        50
    } else {
        0
    }
}

fn track(id: &str, title: &str, artist: &str, duration: &str, category: &str, plays: Option<u64>) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        duration: duration.to_string(),
        category: category.to_string(),
        image_url: format!("https://picsum.photos/400/400?random={}", id),
        plays,
        likes: None,
    }
}

fn artist(id: &str, name: &str, viewers: &str, gradient: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://i.pravatar.cc/150?u={}", id),
        viewers: Some(viewers.to_string()),
        gradient: gradient.to_string(),
    }
}

fn category(id: &str, name: &str, icon: &str, track_count: u32, gradient: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        track_count,
        gradient: gradient.to_string(),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let categories = vec![
            category("1", "Manifestation", "Sparkles", 124, "purple"),
            category("2", "Confidence", "Zap", 85, "amber"),
            category("3", "Focus", "Target", 200, "blue"),
            category("4", "Sleep", "Moon", 340, "indigo"),
            category("5", "Abundance", "Gem", 92, "emerald"),
            category("6", "Self-Love", "Heart", 150, "rose"),
        ];

        let trending = vec![
            track("t1", "Quantum Wealth Shift", "Sublyme Originals", "10:00", "Abundance", Some(12500)),
            track("t2", "Deep Sleep Delta", "Sleep Well", "45:00", "Sleep", Some(8900)),
            track("t3", "Instant Confidence", "Mind Power", "15:00", "Confidence", Some(15200)),
            track("t4", "Laser Focus 40Hz", "Brain Waves", "60:00", "Focus", Some(6700)),
        ];

        let playlist_tracks = vec![
            track("p1", "Velvet Echoes", "Nova Rae", "3:52", "Manifestation", None),
            track("p2", "Golden Hour Affirmations", "Nova Rae", "4:10", "Manifestation", None),
            track("p3", "Limitless Mind", "Sublyme Originals", "5:24", "Focus", None),
            track("p4", "Ocean of Calm", "Sleep Well", "8:00", "Sleep", None),
            track("p5", "Radiant Self", "Mind Power", "3:33", "Self-Love", None),
        ];

        let mut creator_tracks = vec![
            track("c1", "Money Magnet Pack", "Luna Vibes", "12:00", "Abundance", Some(4200)),
            track("c2", "Glow Up Blueprint", "Luna Vibes", "9:45", "Self-Love", Some(3900)),
            track("c3", "Unshakeable Aura", "Luna Vibes", "7:30", "Confidence", Some(2800)),
        ];
        for (t, likes) in creator_tracks.iter_mut().zip(["1.2k", "980", "640"]) {
            t.likes = Some(likes.to_string());
        }

        let creators = vec![
            CreatorProfile {
                id: "a1".to_string(),
                name: "Luna Vibes".to_string(),
                image_url: "https://i.pravatar.cc/150?u=luna".to_string(),
                viewers: Some("2.4k".to_string()),
                handle: "@lunavibes".to_string(),
                bio: "Subliminal producer. Layering intentions under lo-fi since 2019.".to_string(),
                followers: "48.2k".to_string(),
                following: "312".to_string(),
                gradient: "emerald".to_string(),
                tags: vec!["Abundance".to_string(), "Glow Up".to_string()],
            },
            CreatorProfile {
                id: "a2".to_string(),
                name: "Nova Rae".to_string(),
                image_url: "https://i.pravatar.cc/150?u=nova".to_string(),
                viewers: Some("870".to_string()),
                handle: "@novarae".to_string(),
                bio: "Dream-pop affirmations for night owls.".to_string(),
                followers: "12.9k".to_string(),
                following: "88".to_string(),
                gradient: "purple".to_string(),
                tags: vec!["Manifestation".to_string(), "Sleep".to_string()],
            },
        ];

        Self {
            categories,
            trending,
            playlist_tracks,
            creator_tracks,
            creators,
            popular_searches: vec![
                "Velvet Echoes".to_string(),
                "Deep Sleep".to_string(),
                "40Hz".to_string(),
                "Luna Vibes".to_string(),
            ],
            search_categories: vec![
                "Manifestation".to_string(),
                "Confidence".to_string(),
                "Focus".to_string(),
                "Sleep".to_string(),
            ],
            suggested_artists: vec![
                artist("s1", "Luna Vibes", "2.4k", "emerald"),
                artist("s2", "Nova Rae", "870", "purple"),
                artist("s3", "Sleep Well", "1.1k", "indigo"),
                artist("s4", "Mind Power", "640", "amber"),
            ],
            user_stats: UserStats {
                days_active: 42,
                hours_listened: 128,
                streak: 5,
            },
        }
    }
}
