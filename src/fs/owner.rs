use std::fs;
use std::path::Path;

const PASSWD_PATH: &str = "/etc/passwd";

/// Resolve a numeric user id to a login name, falling back to the number itself.
pub fn user_name(uid: u32) -> String {
    lookup_in(Path::new(PASSWD_PATH), uid).unwrap_or_else(|| uid.to_string())
}

fn lookup_in(passwd: &Path, uid: u32) -> Option<String> {
    let content = fs::read_to_string(passwd).ok()?;
    find_user(&content, uid)
}

/// Find the login name for `uid` in passwd(5)-formatted text.
fn find_user(content: &str, uid: u32) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| {
            let mut fields = line.split(':');
            let name = fields.next()?;
            let _password = fields.next()?;
            let id: u32 = fields.next()?.parse().ok()?;
            (id == uid && !name.is_empty()).then(|| name.to_string())
        })
}
