//! Navigation surface and session gating.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::MenuItemId;
use crate::identity::Session;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no route matches '{0}'")]
pub struct UnknownRoute(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ItemDetail(MenuItemId),
    Favorites,
    Login,
    Register,
    Booking,
    BookingHistory,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::ItemDetail(id) => format!("/pizza/{}", id),
            Self::Favorites => "/favorites".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Booking => "/booking".to_string(),
            Self::BookingHistory => "/my-bookings".to_string(),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Favorites | Self::Booking | Self::BookingHistory)
    }

    fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = match s.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let route = match path {
            "/" => Self::Home,
            "/favorites" => Self::Favorites,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/booking" => Self::Booking,
            "/my-bookings" => Self::BookingHistory,
            other => other
                .strip_prefix("/pizza/")
                .and_then(|id| id.parse().ok())
                .map(Self::ItemDetail)
                .ok_or_else(|| UnknownRoute(s.to_string()))?,
        };
        Ok(route)
    }
}

/// Where a navigation to `route` actually lands for this session.
pub fn guard(route: Route, session: &Session) -> Route {
    if route.requires_session() && !session.is_authenticated() {
        tracing::debug!(%route, "Redirecting to login");
        return Route::Login;
    }
    if route.guest_only() && session.is_authenticated() {
        return Route::Home;
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_back() {
        for route in [
            Route::Home,
            Route::ItemDetail(7),
            Route::Favorites,
            Route::Login,
            Route::Register,
            Route::Booking,
            Route::BookingHistory,
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!("/favorites/".parse::<Route>(), Ok(Route::Favorites));
    }

    #[test]
    fn bad_item_id_is_unknown() {
        assert!("/pizza/abc".parse::<Route>().is_err());
        assert!("/menu".parse::<Route>().is_err());
    }
}
