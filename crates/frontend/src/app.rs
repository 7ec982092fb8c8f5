use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::store::StoreClient;

#[component]
pub fn App(client: StoreClient) -> impl IntoView {
    // Provide the store client to every page via context.
    provide_context(client);

    view! {
        <AppRoutes />
    }
}
