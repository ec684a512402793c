pub mod collection;
pub mod flashcard;
pub mod user;

use flashdeck_auth_types::credentials::BasicCredentials;
use flashdeck_domain::owner::OwnerId;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::identity::ResolveIdentityUseCase;

/// Run the credential gate for a protected handler.
pub(crate) async fn authenticate(
    state: &AppState,
    credentials: &BasicCredentials,
) -> Result<OwnerId, ApiError> {
    let gate = ResolveIdentityUseCase {
        users: state.user_repo(),
        admin: state.admin.clone(),
    };
    gate.execute(credentials).await
}
