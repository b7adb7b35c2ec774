//! The dashboard shell served at the root path.
//!
//! The page only renders the chrome around an empty `main` region, browser
//! code fills the region by calling the accounts API.

use axum::Extension;
use maud::{Markup, html};

use crate::{
    auth::Identity,
    endpoints,
    html::{APP_NAME, LINK_CURRENT_STYLE, LINK_STYLE, base},
};

struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            LINK_CURRENT_STYLE
        } else {
            LINK_STYLE
        };

        html!( a href=(self.url) class=(style) aria-current=[self.is_current.then_some("page")] { (self.title) } )
    }
}

fn nav_links(active_endpoint: &str) -> Vec<Link<'_>> {
    vec![
        Link {
            url: endpoints::ROOT,
            title: "Overview",
            is_current: active_endpoint == endpoints::ROOT,
        },
        Link {
            url: endpoints::ACCOUNTS_VIEW,
            title: "Accounts",
            is_current: active_endpoint == endpoints::ACCOUNTS_VIEW,
        },
    ]
}

fn header(identity: &Identity) -> Markup {
    html!(
        header class="bg-gradient-to-b from-blue-700 to-blue-500 px-4 py-8 lg:px-14 pb-36"
        {
            div class="max-w-screen-2xl mx-auto"
            {
                div class="flex items-center lg:gap-x-16 mb-14"
                {
                    a href=(endpoints::ROOT) class="flex items-center"
                    {
                        span class="font-semibold text-white text-2xl" { (APP_NAME) }
                    }

                    nav
                    {
                        ul class="flex gap-x-4"
                        {
                            @for link in nav_links(endpoints::ROOT) {
                                li { (link.into_html()) }
                            }
                        }
                    }
                }

                h2 class="text-2xl lg:text-4xl text-white font-medium"
                {
                    "Welcome back, " (identity.user_id)
                }
            }
        }
    )
}

/// Display the dashboard shell for the signed-in user.
pub async fn get_dashboard_page(Extension(identity): Extension<Identity>) -> Markup {
    let content = html!(
        div
        {
            (header(&identity))

            main id="app" class="px-3 lg:px-14" data-accounts-api=(endpoints::ACCOUNTS) {}
        }
    );

    base("Overview", &content)
}

#[cfg(test)]
mod tests {
    use axum::{Extension, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        auth::Identity,
        endpoints,
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::get_dashboard_page;

    #[tokio::test]
    async fn renders_shell_for_identity() {
        let identity = Identity {
            user_id: "user_1".to_owned(),
        };

        let response = get_dashboard_page(Extension(identity)).await.into_response();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let heading = document
            .select(&Selector::parse("header h2").unwrap())
            .next()
            .expect("missing welcome message");
        assert_eq!(
            heading.text().collect::<String>(),
            "Welcome back, user_1"
        );

        let links: Vec<_> = document
            .select(&Selector::parse("nav a").unwrap())
            .map(|link| link.value().attr("href").unwrap_or_default().to_owned())
            .collect();
        assert_eq!(links, vec![endpoints::ROOT, endpoints::ACCOUNTS_VIEW]);

        let main = document
            .select(&Selector::parse("main#app").unwrap())
            .next()
            .expect("missing main region");
        assert_eq!(main.children().count(), 0);
        assert_eq!(main.value().attr("data-accounts-api"), Some(endpoints::ACCOUNTS));
    }
}
