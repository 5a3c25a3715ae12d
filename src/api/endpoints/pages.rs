use axum::response::Html;

const HOME_PAGE: &str = include_str!("../../../templates/home.html");
const ADMIN_PAGE: &str = include_str!("../../../templates/admin.html");
const TOURIST_PAGE: &str = include_str!("../../../templates/tourist.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

pub async fn tourist() -> Html<&'static str> {
    Html(TOURIST_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HOME_PAGE)]
    #[case(ADMIN_PAGE)]
    #[case(TOURIST_PAGE)]
    fn pages_never_inject_markup(#[case] page: &str) {
        assert!(!page.contains("innerHTML"));
        assert!(!page.contains("onclick="));
    }

    #[rstest]
    #[case(TOURIST_PAGE, "/location")]
    #[case(TOURIST_PAGE, "/nearest_locations")]
    #[case(TOURIST_PAGE, "/nearest-locations")]
    #[case(TOURIST_PAGE, "/geofences")]
    #[case(TOURIST_PAGE, "/sos")]
    #[case(ADMIN_PAGE, "/alerts")]
    #[case(ADMIN_PAGE, "/alerts/update")]
    fn pages_use_the_api(#[case] page: &str, #[case] endpoint: &str) {
        assert!(page.contains(&format!("'{}'", endpoint)), "missing call to {}", endpoint);
    }
}
