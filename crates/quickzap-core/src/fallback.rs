//! Built-in country list used when the country directory is unreachable.

use crate::country::Country;

/// (name, ISO code, dialing code), sorted by name.
const FALLBACK_COUNTRIES: &[(&str, &str, &str)] = &[
    ("Afghanistan", "AF", "+93"),
    ("Albania", "AL", "+355"),
    ("Algeria", "DZ", "+213"),
    ("Argentina", "AR", "+54"),
    ("Armenia", "AM", "+374"),
    ("Australia", "AU", "+61"),
    ("Austria", "AT", "+43"),
    ("Azerbaijan", "AZ", "+994"),
    ("Bahrain", "BH", "+973"),
    ("Bangladesh", "BD", "+880"),
    ("Belarus", "BY", "+375"),
    ("Belgium", "BE", "+32"),
    ("Bolivia", "BO", "+591"),
    ("Brazil", "BR", "+55"),
    ("Bulgaria", "BG", "+359"),
    ("Cambodia", "KH", "+855"),
    ("Canada", "CA", "+1"),
    ("Chile", "CL", "+56"),
    ("China", "CN", "+86"),
    ("Colombia", "CO", "+57"),
    ("Costa Rica", "CR", "+506"),
    ("Croatia", "HR", "+385"),
    ("Czech Republic", "CZ", "+420"),
    ("Denmark", "DK", "+45"),
    ("Dominican Republic", "DO", "+1"),
    ("Ecuador", "EC", "+593"),
    ("Egypt", "EG", "+20"),
    ("El Salvador", "SV", "+503"),
    ("Estonia", "EE", "+372"),
    ("Finland", "FI", "+358"),
    ("France", "FR", "+33"),
    ("Georgia", "GE", "+995"),
    ("Germany", "DE", "+49"),
    ("Ghana", "GH", "+233"),
    ("Greece", "GR", "+30"),
    ("Guatemala", "GT", "+502"),
    ("Honduras", "HN", "+504"),
    ("Hong Kong", "HK", "+852"),
    ("Hungary", "HU", "+36"),
    ("Iceland", "IS", "+354"),
    ("India", "IN", "+91"),
    ("Indonesia", "ID", "+62"),
    ("Ireland", "IE", "+353"),
    ("Israel", "IL", "+972"),
    ("Italy", "IT", "+39"),
    ("Japan", "JP", "+81"),
    ("Jordan", "JO", "+962"),
    ("Kazakhstan", "KZ", "+7"),
    ("Kenya", "KE", "+254"),
    ("Kuwait", "KW", "+965"),
    ("Latvia", "LV", "+371"),
    ("Lebanon", "LB", "+961"),
    ("Lithuania", "LT", "+370"),
    ("Luxembourg", "LU", "+352"),
    ("Malaysia", "MY", "+60"),
    ("Mexico", "MX", "+52"),
    ("Morocco", "MA", "+212"),
    ("Netherlands", "NL", "+31"),
    ("New Zealand", "NZ", "+64"),
    ("Nigeria", "NG", "+234"),
    ("Norway", "NO", "+47"),
    ("Pakistan", "PK", "+92"),
    ("Panama", "PA", "+507"),
    ("Paraguay", "PY", "+595"),
    ("Peru", "PE", "+51"),
    ("Philippines", "PH", "+63"),
    ("Poland", "PL", "+48"),
    ("Portugal", "PT", "+351"),
    ("Qatar", "QA", "+974"),
    ("Romania", "RO", "+40"),
    ("Russia", "RU", "+7"),
    ("Saudi Arabia", "SA", "+966"),
    ("Singapore", "SG", "+65"),
    ("Slovakia", "SK", "+421"),
    ("Slovenia", "SI", "+386"),
    ("South Africa", "ZA", "+27"),
    ("South Korea", "KR", "+82"),
    ("Spain", "ES", "+34"),
    ("Sri Lanka", "LK", "+94"),
    ("Sweden", "SE", "+46"),
    ("Switzerland", "CH", "+41"),
    ("Taiwan", "TW", "+886"),
    ("Thailand", "TH", "+66"),
    ("Turkey", "TR", "+90"),
    ("Ukraine", "UA", "+380"),
    ("United Arab Emirates", "AE", "+971"),
    ("United Kingdom", "GB", "+44"),
    ("United States", "US", "+1"),
    ("Uruguay", "UY", "+598"),
    ("Venezuela", "VE", "+58"),
    ("Vietnam", "VN", "+84"),
];

/// The static fallback catalog entries.
pub fn fallback_countries() -> Vec<Country> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|(name, code, phone_code)| Country::new(name, code, phone_code))
        .collect()
}
