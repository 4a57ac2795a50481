use crate::model::Game;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Game {
        id: String,
        /// Navigation hint: the game as the previous screen saw it.
        hint: Option<Game>,
    },
}

impl Route {
    pub fn game(game: &Game) -> Self {
        Route::Game {
            id: game.id.clone(),
            hint: Some(game.clone()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Game { id, .. } => format!("/game/{}", id),
        }
    }

    /// Resolves a path typed by hand; such routes never carry a hint.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }
        let id = path.strip_prefix("/game/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::Game {
            id: id.to_string(),
            hint: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let game = Game {
            id: "22500150".into(),
            opponent: "San Antonio Spurs".into(),
            ..Default::default()
        };
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::game(&game).path(), "/game/22500150");
    }

    #[test]
    fn game_route_carries_hint() {
        let game = Game {
            id: "1".into(),
            opponent: "Utah Jazz".into(),
            ..Default::default()
        };
        match Route::game(&game) {
            Route::Game { hint: Some(h), .. } => assert_eq!(h.opponent, "Utah Jazz"),
            other => panic!("unexpected route {:?}", other),
        }
    }

    #[test]
    fn parse_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(
            Route::parse("/game/42"),
            Some(Route::Game { id: "42".into(), hint: None })
        );
        assert_eq!(Route::parse("/game/"), None);
        assert_eq!(Route::parse("/games"), None);
        assert_eq!(Route::parse("/game/1/2"), None);
    }
}
