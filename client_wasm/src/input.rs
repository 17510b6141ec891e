//! Keyboard input handling

#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Space is the only key that flaps
pub fn is_jump_key(key: &str, code: &str) -> bool {
    key == " " || code == "Space"
}

/// Does this key event mean "jump"?
#[cfg(target_arch = "wasm32")]
pub fn is_jump_event(event: &KeyboardEvent) -> bool {
    is_jump_key(&event.key(), &event.code())
}
