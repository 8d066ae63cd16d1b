use meal_plan_form_rs::request::{legacy_is_ambiguous, Encoding, MealPlanRequest, Token};
use meal_plan_form_rs::{Calories, DietType, FormController, MealCount, Preferences};

fn prefs(diet: Option<DietType>, calories: u32, meals: MealCount, allergies: &str) -> Preferences {
    Preferences {
        diet_type: diet,
        calories: Calories::new(calories).unwrap(),
        meals,
        allergies: allergies.to_string(),
    }
}

#[test]
fn test_reference_token() {
    let p = prefs(Some(DietType::Vegan), 1800, MealCount::Four, "nuts");
    assert_eq!(
        Token::encode(&p, Encoding::Legacy).as_str(),
        "DietType:vegan-NumberOfMealsPerDay:4-DailyCalorieGoal:1800-Allergies:nuts"
    );
}

#[test]
fn test_calorie_segment_is_verbatim_for_every_slider_value() {
    for calories in (1200..=4000).step_by(100) {
        let p = prefs(Some(DietType::Omnivore), calories, MealCount::Three, "");
        let token = Token::encode(&p, Encoding::Legacy);
        let fields = Token::parse(token.as_str(), Encoding::Legacy).unwrap();
        assert_eq!(fields.calories, calories.to_string());
    }
}

#[test]
fn test_every_diet_and_meal_count_encodes() {
    for diet in DietType::ALL {
        for meals in MealCount::ALL {
            let p = prefs(Some(diet), 2000, meals, "");
            let token = Token::encode(&p, Encoding::Legacy);
            let fields = Token::parse(token.as_str(), Encoding::Legacy).unwrap();
            assert_eq!(fields.diet_type, diet.as_str());
            assert_eq!(fields.meals, meals.as_str());
        }
    }
}

#[test]
fn test_fresh_form_state() {
    let controller = FormController::new("http://planner.test", Encoding::Legacy);
    let p = controller.preferences();
    assert_eq!(p.diet_type_str(), "");
    assert_eq!(p.calories.get(), 2000);
    assert_eq!(p.meals.as_str(), "3");
    assert_eq!(p.allergies, "");
    assert!(controller.result().is_none());
}

#[test]
fn test_slider_extremes_and_beyond() {
    assert!(Calories::new(1200).is_ok());
    assert!(Calories::new(4000).is_ok());
    assert!(Calories::new(1199).is_err());
    assert!(Calories::new(4001).is_err());
    assert_eq!(Calories::snap(100), Calories::MIN);
    assert_eq!(Calories::snap(10_000), Calories::MAX);
}

#[test]
fn test_request_url_is_form_encoded() {
    let p = prefs(Some(DietType::Keto), 2200, MealCount::Five, "shellfish, soy");
    let request = MealPlanRequest::build("http://planner.test", &p, Encoding::Legacy).unwrap();
    assert_eq!(
        request.url.as_str(),
        "http://planner.test/generate/meal-plan?message=DietType%3Aketo-NumberOfMealsPerDay%3A5-DailyCalorieGoal%3A2200-Allergies%3Ashellfish%2C+soy"
    );
}

#[test]
fn test_delimiters_in_allergies_flagged() {
    let hyphenated = prefs(None, 2000, MealCount::Three, "gluten-free");
    assert!(legacy_is_ambiguous(&hyphenated));

    let fine = prefs(None, 2000, MealCount::Three, "gluten free");
    assert!(!legacy_is_ambiguous(&fine));
}

#[test]
fn test_legacy_round_trip_preserves_literal_escapes() {
    for allergies in ["100% dairy", "code %2D", "%3A%25"] {
        let p = prefs(Some(DietType::Paleo), 2400, MealCount::Six, allergies);
        let token = Token::encode(&p, Encoding::Legacy);
        let fields = Token::parse(token.as_str(), Encoding::Legacy).unwrap();
        assert_eq!(fields.allergies, allergies);
        assert_eq!(fields.calories, "2400");
    }
}

#[test]
fn test_escaped_round_trip_preserves_literal_escapes() {
    for allergies in ["100% dairy", "code %2D", "tree-nuts: severe"] {
        let p = prefs(Some(DietType::Paleo), 2400, MealCount::Six, allergies);
        let token = Token::encode(&p, Encoding::Escaped);
        let fields = Token::parse(token.as_str(), Encoding::Escaped).unwrap();
        assert_eq!(fields.allergies, allergies);
    }
}
