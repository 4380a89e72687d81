use contracts::system::auth::StaffSession;
use web_sys::window;

const SESSION_KEY: &str = "admin_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in session to localStorage
pub fn save_session(session: &StaffSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::warn!("Failed to serialize session: {}", e),
    }
}

/// Read the session back; unreadable values count as no session
pub fn load_session() -> Option<StaffSession> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
