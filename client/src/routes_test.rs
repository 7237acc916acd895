use super::*;

// =============================================================================
// application table
// =============================================================================

#[test]
fn app_routes_match_validated_entries() {
    assert_eq!(RouteTable::new(app_route_entries()).unwrap(), app_routes());
}

#[test]
fn root_renders_dashboard() {
    let routes = app_routes();
    for path in ["", "/", "//", "/?tab=1", "/#top"] {
        assert_eq!(routes.resolve(path), RouteTarget::Page(Page::Dashboard), "path {path:?}");
    }
}

#[test]
fn other_paths_redirect_to_root() {
    let routes = app_routes();
    for path in ["/anything/else", "dashboard", "/login", "/board/42", "/index.html"] {
        assert_eq!(routes.resolve(path), RouteTarget::Redirect(String::new()), "path {path:?}");
    }
}

#[test]
fn navigate_other_path_lands_on_root_after_one_hop() {
    let nav = app_routes().navigate("/anything/else");
    assert_eq!(nav, Navigation { path: "/".into(), page: Page::Dashboard, redirects: 1 });
}

#[test]
fn navigate_root_is_idempotent() {
    let routes = app_routes();
    let first = routes.navigate("");
    assert_eq!(first, Navigation { path: "/".into(), page: Page::Dashboard, redirects: 0 });
    assert_eq!(routes.navigate(&first.path), first);
}

#[test]
fn navigate_redirect_target_resolves_without_further_redirects() {
    let routes = app_routes();
    let redirected = routes.navigate("/nope");
    assert_eq!(routes.navigate(&redirected.path).redirects, 0);
}

// =============================================================================
// validation
// =============================================================================

#[test]
fn new_rejects_empty_table() {
    assert_eq!(RouteTable::new(vec![]), Err(RouteError::MissingCatchAll));
}

#[test]
fn new_rejects_missing_catch_all() {
    let entries = vec![RouteEntry::page("", Page::Dashboard)];
    assert_eq!(RouteTable::new(entries), Err(RouteError::MissingCatchAll));
}

#[test]
fn new_rejects_shadowed_entries() {
    let entries = vec![
        RouteEntry::page("", Page::Dashboard),
        RouteEntry::page("/", Page::Dashboard),
        RouteEntry::redirect(CATCH_ALL, ""),
    ];
    assert_eq!(RouteTable::new(entries), Err(RouteError::Unreachable("/".into())));

    let entries = vec![
        RouteEntry::redirect(CATCH_ALL, ""),
        RouteEntry::page("", Page::Dashboard),
        RouteEntry::redirect(CATCH_ALL, ""),
    ];
    assert_eq!(RouteTable::new(entries), Err(RouteError::Unreachable(CATCH_ALL.into())));
}

#[test]
fn new_rejects_redirect_chains() {
    let entries = vec![
        RouteEntry::page("", Page::Dashboard),
        RouteEntry::redirect("home", "start"),
        RouteEntry::redirect("start", ""),
        RouteEntry::redirect(CATCH_ALL, ""),
    ];
    assert_eq!(
        RouteTable::new(entries),
        Err(RouteError::RedirectChain { from: "home".into(), to: "start".into() })
    );
}

#[test]
fn new_rejects_catch_all_redirecting_into_itself() {
    let entries = vec![RouteEntry::page("", Page::Dashboard), RouteEntry::redirect(CATCH_ALL, "missing")];
    assert_eq!(
        RouteTable::new(entries),
        Err(RouteError::RedirectChain { from: CATCH_ALL.into(), to: "missing".into() })
    );
}

#[test]
fn catch_all_page_is_allowed() {
    let routes = RouteTable::new(vec![RouteEntry::page(CATCH_ALL, Page::Dashboard)]).unwrap();
    assert_eq!(routes.navigate("/x").redirects, 0);
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn normalize_strips_slashes_query_and_fragment() {
    assert_eq!(normalize("/a/b/?x=1"), "a/b");
    assert_eq!(normalize("/#frag"), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn to_url_prefixes_slash() {
    assert_eq!(to_url(""), "/");
    assert_eq!(to_url("a/b/"), "/a/b");
}
