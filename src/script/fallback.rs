use super::ScriptRequest;

/// The canned Marathi script used whenever generation fails.
///
/// Always non-empty and always carries all five beats.
pub fn fallback_script(request: &ScriptRequest) -> String {
    let business = &request.business_name;
    let service = &request.service;

    format!(
        "[soft, emotional]
व्यवसाय वाढवायचा आहे…
पण दररोज आकर्षक पोस्ट बनवायला वेळच मिळत नाही?

[hopeful]
पण आता ही चिंता मागे ठेवा…

[happy, energetic]
आता काळजी सोडा!
{business} सोबत {service} झाले अगदी सोपे.
नाव, फोटो आणि माहिती टाका —
आणि तयार सुंदर पोस्ट, एका क्लिकमध्ये!

[confident]
तुमचा ब्रँड दिसेल प्रोफेशनल
आणि ग्राहकही होतील अधिक आकर्षित!

[strong, energetic]
आजच डाउनलोड करा {business}
आणि तुमच्या व्यवसायाला द्या नवी दिशा!"
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::beats::{check_structure, parse, Beat};

    fn request(business: &str, service: &str) -> ScriptRequest {
        ScriptRequest {
            business_name: business.into(),
            service: service.into(),
            target_audience: "students".into(),
        }
    }

    #[test]
    fn test_has_five_beats() {
        let script = fallback_script(&request("PostKar", "poster design"));
        assert!(check_structure(&script).is_ok());
    }

    #[test]
    fn test_substitutes_names() {
        let script = fallback_script(&request("PostKar", "poster design"));
        let beats = parse(&script);

        let solution = &beats[2];
        assert_eq!(solution.cue, Beat::Solution.cue());
        assert!(solution
            .lines
            .iter()
            .any(|l| l == "PostKar सोबत poster design झाले अगदी सोपे."));

        let call = &beats[4];
        assert_eq!(call.lines[0], "आजच डाउनलोड करा PostKar");
    }

    #[test]
    fn test_trimmed() {
        let script = fallback_script(&request("X", "Y"));
        assert!(script.starts_with("[soft, emotional]"));
        assert!(script.ends_with("नवी दिशा!"));
    }

    #[test]
    fn test_empty_inputs_still_usable() {
        let script = fallback_script(&request("", ""));
        assert!(!script.is_empty());
        assert!(check_structure(&script).is_ok());
    }

    #[test]
    fn test_ignores_audience() {
        let mut other = request("PostKar", "poster design");
        other.target_audience = "retirees".into();
        assert_eq!(
            fallback_script(&request("PostKar", "poster design")),
            fallback_script(&other)
        );
    }
}
