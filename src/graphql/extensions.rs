use std::sync::Arc;

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextValidation};
use async_graphql::{ServerError, ValidationResult};

use crate::error::BAD_USER_INPUT;

/// Tags documents rejected during validation (missing or mistyped arguments,
/// unknown fields) with the same `code` resolvers use for invalid input.
pub struct ClientInputErrors;

impl ExtensionFactory for ClientInputErrors {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(ClientInputErrorsExtension)
    }
}

struct ClientInputErrorsExtension;

fn tag_client_error(mut error: ServerError) -> ServerError {
    let extensions = error.extensions.get_or_insert_with(Default::default);
    if extensions.get("code").is_none() {
        extensions.set("code", BAD_USER_INPUT);
    }
    error
}

#[async_trait::async_trait]
impl Extension for ClientInputErrorsExtension {
    async fn validation(
        &self,
        ctx: &ExtensionContext<'_>,
        next: NextValidation<'_>,
    ) -> Result<ValidationResult, Vec<ServerError>> {
        next.run(ctx).await.map_err(|errors| {
            tracing::debug!(count = errors.len(), "Rejected invalid GraphQL document");
            errors.into_iter().map(tag_client_error).collect()
        })
    }
}
