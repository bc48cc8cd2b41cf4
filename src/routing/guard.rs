use super::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

/// Access guard. Only checks that a token exists; whether the server still
/// accepts it is found out by the first protected call.
pub fn resolve(requested: Route, token: Option<&str>) -> Resolution {
    let signed_in = token.is_some();
    match requested {
        route if route.is_protected() && !signed_in => Resolution::Redirect(Route::SignIn),
        Route::SignIn if signed_in => Resolution::Redirect(Route::Home),
        route => Resolution::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_without_token_redirects_to_sign_in() {
        assert_eq!(resolve(Route::Home, None), Resolution::Redirect(Route::SignIn));
    }

    #[test]
    fn home_with_token_renders() {
        assert_eq!(resolve(Route::Home, Some("abc")), Resolution::Render(Route::Home));
    }

    #[test]
    fn sign_in_is_left_once_authenticated() {
        assert_eq!(resolve(Route::SignIn, Some("abc")), Resolution::Redirect(Route::Home));
        assert_eq!(resolve(Route::SignIn, None), Resolution::Render(Route::SignIn));
    }

    #[test]
    fn redirect_targets_are_stable() {
        // resolving the redirect target never bounces back
        for token in [None, Some("abc")] {
            for route in [Route::Home, Route::SignIn] {
                if let Resolution::Redirect(target) = resolve(route, token) {
                    assert_eq!(resolve(target, token), Resolution::Render(target));
                }
            }
        }
    }
}
