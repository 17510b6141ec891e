//! Screen State Machine
//!
//! Which screen the page shows: the start card, the game itself, or the
//! game-over card. The simulation's own session states live in `game_core`.

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    GameOver,
}

/// Actions that trigger screen changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    StartGame,
    GameOver,
    Restart,
}

/// Result of a screen transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTransition {
    pub success: bool,
    pub from_screen: Screen,
    pub to_screen: Screen,
    pub action: ScreenAction,
}

/// Screen finite state machine
#[derive(Debug, Clone)]
pub struct ScreenFsm {
    screen: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            screen: Screen::Start,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn can_transition(&self, action: ScreenAction) -> bool {
        Self::next_screen(self.screen, action).is_some()
    }

    pub fn transition(&mut self, action: ScreenAction) -> ScreenTransition {
        let from_screen = self.screen;
        let to_screen = Self::next_screen(from_screen, action);
        if let Some(next) = to_screen {
            self.screen = next;
        }
        ScreenTransition {
            success: to_screen.is_some(),
            from_screen,
            to_screen: self.screen,
            action,
        }
    }

    fn next_screen(screen: Screen, action: ScreenAction) -> Option<Screen> {
        match (screen, action) {
            (Screen::Start, ScreenAction::StartGame) => Some(Screen::Playing),
            (Screen::Playing, ScreenAction::GameOver) => Some(Screen::GameOver),
            (Screen::GameOver, ScreenAction::Restart) => Some(Screen::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen() {
        let fsm = ScreenFsm::new();
        assert_eq!(fsm.screen(), Screen::Start);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_full_flow() {
        let mut fsm = ScreenFsm::new();
        assert!(fsm.transition(ScreenAction::StartGame).success);
        assert!(fsm.is_playing());
        assert!(fsm.transition(ScreenAction::GameOver).success);
        assert_eq!(fsm.screen(), Screen::GameOver);

        let result = fsm.transition(ScreenAction::Restart);
        assert_eq!(result.from_screen, Screen::GameOver);
        assert_eq!(result.to_screen, Screen::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::Restart);
        assert!(!result.success);
        assert_eq!(result.to_screen, Screen::Start);
        assert!(!fsm.can_transition(ScreenAction::GameOver));
    }

    #[test]
    fn test_game_over_only_while_playing() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::StartGame);
        fsm.transition(ScreenAction::GameOver);
        assert!(!fsm.transition(ScreenAction::GameOver).success);
        assert!(!fsm.transition(ScreenAction::StartGame).success);
        assert_eq!(fsm.screen(), Screen::GameOver);
    }
}
