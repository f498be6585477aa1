//! Route paths and the header prompt that switches between the sign-in and
//! sign-up flows. The form controllers never read the current path.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const FORGOT: &str = "/forgot";

/// Header call to action for the page at `path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// The signup page points back to sign in; every other page offers sign up.
#[must_use]
pub fn auth_link_for(path: &str) -> AuthLink {
    if path.trim_end_matches('/') == SIGNUP {
        AuthLink {
            prompt: "Already have an account?",
            label: "Sign In",
            href: LOGIN,
        }
    } else {
        AuthLink {
            prompt: "Don't have an account yet?",
            label: "Sign Up",
            href: SIGNUP,
        }
    }
}
