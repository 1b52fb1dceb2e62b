use crate::catalog::CatalogMutation;
use crate::favorites::FavoritesMutation;
use crate::identity::IdentityMutation;
use crate::reservations::ReservationMutation;

/// A mutation addressed to one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Catalog(CatalogMutation),
    Favorites(FavoritesMutation),
    Identity(IdentityMutation),
    Reservations(ReservationMutation),
}

impl Action {
    /// Name of the target slice. Logged instead of the payload, which may
    /// carry a password hash.
    pub fn slice(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Favorites(_) => "favorites",
            Self::Identity(_) => "identity",
            Self::Reservations(_) => "reservations",
        }
    }
}

impl From<CatalogMutation> for Action {
    fn from(mutation: CatalogMutation) -> Self {
        Self::Catalog(mutation)
    }
}

impl From<FavoritesMutation> for Action {
    fn from(mutation: FavoritesMutation) -> Self {
        Self::Favorites(mutation)
    }
}

impl From<IdentityMutation> for Action {
    fn from(mutation: IdentityMutation) -> Self {
        Self::Identity(mutation)
    }
}

impl From<ReservationMutation> for Action {
    fn from(mutation: ReservationMutation) -> Self {
        Self::Reservations(mutation)
    }
}
