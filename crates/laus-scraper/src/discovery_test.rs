use super::*;

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<form action="/map/MapToolServlet" method="post">
  <select name="state">
    <option value="01">Alabama</option>
    <option value="06">California</option>
    <option value="36">New
        York</option>
  </select>
  <select name="year">
    <option value="2020">2020</option>
    <option value="2019">2019</option>
  </select>
  <select name="period">
    <option value="M01">January</option>
    <option value="M02">February</option>
    <option value="M03">March</option>
  </select>
  <input type="radio" name="datatype" value="unemployment" checked> Unemployment Rate<br>
  <input type="radio" name="datatype" value="12_month_net"> 12-Month Net Change<br>
</form>
</body></html>"#;

fn codes(set: &OptionSet) -> Vec<&str> {
    set.codes().collect()
}

// -----------------------------------------------------------------------
// discover_parameter_space
// -----------------------------------------------------------------------

#[test]
fn discovers_all_four_controls_in_document_order() {
    let space = discover_parameter_space(FORM_PAGE).unwrap();
    assert_eq!(codes(&space.states), vec!["01", "06", "36"]);
    assert_eq!(codes(&space.years), vec!["2020", "2019"]);
    assert_eq!(codes(&space.periods), vec!["M01", "M02", "M03"]);
    assert_eq!(codes(&space.datatypes), vec!["unemployment", "12_month_net"]);
}

#[test]
fn labels_are_whitespace_normalized() {
    let space = discover_parameter_space(FORM_PAGE).unwrap();
    assert_eq!(space.states.get("36"), Some("New York"));
    assert_eq!(space.periods.get("M02"), Some("February"));
}

#[test]
fn datatype_label_is_the_trailing_text() {
    let space = discover_parameter_space(FORM_PAGE).unwrap();
    assert_eq!(space.datatypes.get("unemployment"), Some("Unemployment Rate"));
    assert_eq!(space.datatypes.get("12_month_net"), Some("12-Month Net Change"));
}

#[test]
fn request_count_is_product_of_set_sizes() {
    let space = discover_parameter_space(FORM_PAGE).unwrap();
    assert_eq!(space.request_count(), 3 * 2 * 3 * 2);
    assert_eq!(space.combinations().count(), space.request_count());
}

#[test]
fn combinations_iterate_year_period_state_datatype() {
    let space = discover_parameter_space(FORM_PAGE).unwrap();
    let order: Vec<(&str, &str, &str, &str)> = space
        .combinations()
        .take(5)
        .map(|c| {
            (
                c.year.code.as_str(),
                c.period.code.as_str(),
                c.state.code.as_str(),
                c.datatype.code.as_str(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("2020", "M01", "01", "unemployment"),
            ("2020", "M01", "01", "12_month_net"),
            ("2020", "M01", "06", "unemployment"),
            ("2020", "M01", "06", "12_month_net"),
            ("2020", "M01", "36", "unemployment"),
        ]
    );
    let last = space.combinations().last().unwrap();
    assert_eq!(last.year.code, "2019");
    assert_eq!(last.period.code, "M03");
    assert_eq!(last.state.code, "36");
    assert_eq!(last.datatype.code, "12_month_net");
}

#[test]
fn missing_state_control_is_a_discovery_error() {
    let page = FORM_PAGE.replace(r#"name="state""#, r#"name="region""#);
    let err = discover_parameter_space(&page).unwrap_err();
    assert!(
        matches!(err, ScraperError::Discovery { control: "state" }),
        "expected Discovery(state), got: {err:?}"
    );
}

#[test]
fn missing_period_control_is_a_discovery_error() {
    let page = FORM_PAGE.replace(r#"<select name="period">"#, "<select>");
    let err = discover_parameter_space(&page).unwrap_err();
    assert!(matches!(err, ScraperError::Discovery { control: "period" }));
}

#[test]
fn missing_datatype_radios_is_a_discovery_error() {
    let page = FORM_PAGE.replace(r#"name="datatype""#, r#"name="view""#);
    let err = discover_parameter_space(&page).unwrap_err();
    assert!(matches!(err, ScraperError::Discovery { control: "datatype" }));
}

#[test]
fn error_page_fails_on_first_control() {
    let err = discover_parameter_space("<html><body>Access Denied</body></html>").unwrap_err();
    assert!(matches!(err, ScraperError::Discovery { control: "state" }));
}

// -----------------------------------------------------------------------
// extract_select_options / extract_radio_options
// -----------------------------------------------------------------------

#[test]
fn select_options_drop_duplicate_codes() {
    let doc = Html::parse_document(
        r#"<select name="year"><option value="2020">2020</option><option value="2020">again</option><option value="2019">2019</option></select>"#,
    );
    let set = extract_select_options(&doc, "year").unwrap();
    assert_eq!(codes(&set), vec!["2020", "2019"]);
    assert_eq!(set.get("2020"), Some("2020"));
}

#[test]
fn select_option_without_value_uses_text() {
    let doc = Html::parse_document(
        r#"<select name="period"><option>Annual</option><option value="M01">January</option></select>"#,
    );
    let set = extract_select_options(&doc, "period").unwrap();
    assert_eq!(codes(&set), vec!["Annual", "M01"]);
}

#[test]
fn empty_select_is_present_but_empty() {
    let doc = Html::parse_document(r#"<select name="year"></select>"#);
    let set = extract_select_options(&doc, "year").unwrap();
    assert!(set.is_empty());
}

#[test]
fn select_lookup_matches_name_exactly() {
    let doc = Html::parse_document(
        r#"<select name="state_fips"><option value="x">X</option></select>"#,
    );
    assert!(extract_select_options(&doc, "state").is_none());
}

#[test]
fn radio_label_falls_back_to_label_element() {
    let doc = Html::parse_document(
        r#"<form><input type="radio" name="datatype" value="unemployment"><label>Unemployment Rate</label></form>"#,
    );
    let set = extract_radio_options(&doc, "datatype").unwrap();
    assert_eq!(set.get("unemployment"), Some("Unemployment Rate"));
}

#[test]
fn radio_without_value_is_skipped() {
    let doc = Html::parse_document(
        r#"<form><input type="radio" name="datatype"> Broken<input type="radio" name="datatype" value="unemployment"> Rate</form>"#,
    );
    let set = extract_radio_options(&doc, "datatype").unwrap();
    assert_eq!(codes(&set), vec!["unemployment"]);
    assert_eq!(set.get("unemployment"), Some("Rate"));
}

#[test]
fn radio_label_element_after_whitespace() {
    let doc = Html::parse_document(
        "<form>\n  <input type=\"radio\" name=\"datatype\" value=\"unemployment\">\n  <label>Unemployment Rate</label>\n  <input type=\"radio\" name=\"datatype\" value=\"labor_force\">\n  <label for=\"lf\">Labor Force</label>\n</form>",
    );
    let set = extract_radio_options(&doc, "datatype").unwrap();
    assert_eq!(set.get("unemployment"), Some("Unemployment Rate"));
    assert_eq!(set.get("labor_force"), Some("Labor Force"));
}

#[test]
fn radio_followed_by_another_input_has_empty_label() {
    let doc = Html::parse_document(
        "<form><input type=\"radio\" name=\"datatype\" value=\"unemployment\">\n<input type=\"radio\" name=\"datatype\" value=\"labor_force\"> Labor Force</form>",
    );
    let set = extract_radio_options(&doc, "datatype").unwrap();
    assert_eq!(set.get("unemployment"), Some(""));
    assert_eq!(set.get("labor_force"), Some("Labor Force"));
}
