use rand::seq::SliceRandom;
use uuid::Uuid;

/// Colours handed out to participants for carets and presence badges.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8",
    "#F7DC6F", "#BB8FCE", "#85C1E2", "#F8B739", "#52B788",
];

pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Display label derived from the first six characters of the session id.
pub fn default_name(session_id: &str) -> String {
    let prefix: String = session_id.chars().take(6).collect();
    format!("User-{}", prefix)
}

/// Uniform pick from [`PALETTE`].
pub fn pick_color() -> &'static str {
    PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PALETTE[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_uses_id_prefix() {
        assert_eq!(default_name("1234abcd-ffff"), "User-1234ab");
        assert_eq!(default_name("abc"), "User-abc");
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }

    #[test]
    fn colors_come_from_palette() {
        for _ in 0..50 {
            assert!(PALETTE.contains(&pick_color()));
        }
    }
}
