use super::*;

fn render() -> String {
    Owner::new().with(|| view! { <DashboardPage/> }.to_html())
}

#[test]
fn renders_placeholder_text() {
    assert!(render().contains(DASHBOARD_TEXT));
}

#[test]
fn render_is_identical_across_renders() {
    assert_eq!(render(), render());
}
