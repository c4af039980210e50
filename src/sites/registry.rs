//! Central site registry.
//!
//! We intentionally keep this a small, static list (convention over
//! configuration). No file or environment override exists.

use crate::check::rules::{BodyEqualsRule, StatusCodeRule};
use crate::types::Site;

/// The built-in sites, in display order.
///
/// Each URL template carries exactly one `{username}` placeholder. The rule
/// encodes how that site signals a free username: most answer with a status
/// code on the profile URL, Reddit's API answers with a literal `true` body.
pub fn builtin_sites() -> Vec<Site> {
    vec![
        Site::new(
            "Twitch",
            "https://passport.twitch.tv/usernames/{username}",
            StatusCodeRule::new(204),
        ),
        Site::new(
            "Twitter",
            "https://twitter.com/{username}",
            StatusCodeRule::new(404),
        ),
        Site::new(
            "Instagram",
            "https://www.instagram.com/{username}",
            StatusCodeRule::new(404),
        ),
        Site::new(
            "Reddit",
            "https://www.reddit.com/api/username_available.json?user={username}",
            BodyEqualsRule::new("true"),
        ),
        Site::new(
            "Subreddit",
            "https://www.reddit.com/r/{username}",
            StatusCodeRule::new(404),
        ),
    ]
}
