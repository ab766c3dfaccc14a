//! Static city and country tables for zero-I/O geocoding.
//!
//! Well-known Indian cities resolve without touching the external oracle.
//! The country table supplies a UTC-offset fallback when an external lookup
//! returns coordinates without an offset.

/// A cached city: lowercase lookup key, display label, latitude, longitude.
/// All entries are Indian cities at UTC+5.5.
pub const INDIAN_CITIES: &[(&str, &str, f64, f64)] = &[
    ("agra", "Agra", 27.1767, 78.0081),
    ("ahmedabad", "Ahmedabad", 23.0225, 72.5714),
    ("ajmer", "Ajmer", 26.4499, 74.6399),
    ("aligarh", "Aligarh", 27.8974, 78.0880),
    ("allahabad", "Allahabad", 25.4358, 81.8463),
    ("prayagraj", "Prayagraj", 25.4358, 81.8463),
    ("amravati", "Amravati", 20.9374, 77.7796),
    ("amritsar", "Amritsar", 31.6340, 74.8723),
    ("aurangabad", "Aurangabad", 19.8762, 75.3433),
    ("bareilly", "Bareilly", 28.3670, 79.4304),
    ("bangalore", "Bengaluru", 12.9716, 77.5946),
    ("bengaluru", "Bengaluru", 12.9716, 77.5946),
    ("bhopal", "Bhopal", 23.2599, 77.4126),
    ("bhubaneswar", "Bhubaneswar", 20.2961, 85.8245),
    ("bikaner", "Bikaner", 28.0229, 73.3119),
    ("chandigarh", "Chandigarh", 30.7333, 76.7794),
    ("chennai", "Chennai", 13.0827, 80.2707),
    ("madras", "Chennai", 13.0827, 80.2707),
    ("coimbatore", "Coimbatore", 11.0168, 76.9558),
    ("cuttack", "Cuttack", 20.4625, 85.8830),
    ("dehradun", "Dehradun", 30.3165, 78.0322),
    ("delhi", "Delhi", 28.7041, 77.1025),
    ("new delhi", "New Delhi", 28.6139, 77.2090),
    ("dhanbad", "Dhanbad", 23.7957, 86.4304),
    ("durgapur", "Durgapur", 23.5204, 87.3119),
    ("faridabad", "Faridabad", 28.4089, 77.3178),
    ("ferozepur", "Ferozepur", 30.9165, 74.6130),
    ("firozpur", "Ferozepur", 30.9165, 74.6130),
    ("gandhinagar", "Gandhinagar", 23.2156, 72.6369),
    ("gaya", "Gaya", 24.7914, 85.0002),
    ("ghaziabad", "Ghaziabad", 28.6692, 77.4538),
    ("gorakhpur", "Gorakhpur", 26.7606, 83.3732),
    ("guntur", "Guntur", 16.3067, 80.4365),
    ("gurgaon", "Gurugram", 28.4595, 77.0266),
    ("gurugram", "Gurugram", 28.4595, 77.0266),
    ("guwahati", "Guwahati", 26.1445, 91.7362),
    ("gwalior", "Gwalior", 26.2183, 78.1828),
    ("haridwar", "Haridwar", 29.9457, 78.1642),
    ("hubli", "Hubballi", 15.3647, 75.1240),
    ("hyderabad", "Hyderabad", 17.3850, 78.4867),
    ("indore", "Indore", 22.7196, 75.8577),
    ("jabalpur", "Jabalpur", 23.1815, 79.9864),
    ("jaipur", "Jaipur", 26.9124, 75.7873),
    ("jalandhar", "Jalandhar", 31.3260, 75.5762),
    ("jammu", "Jammu", 32.7266, 74.8570),
    ("jamshedpur", "Jamshedpur", 22.8046, 86.2029),
    ("jhansi", "Jhansi", 25.4484, 78.5685),
    ("jodhpur", "Jodhpur", 26.2389, 73.0243),
    ("kanpur", "Kanpur", 26.4499, 80.3319),
    ("kochi", "Kochi", 9.9312, 76.2673),
    ("cochin", "Kochi", 9.9312, 76.2673),
    ("kolhapur", "Kolhapur", 16.7050, 74.2433),
    ("kolkata", "Kolkata", 22.5726, 88.3639),
    ("calcutta", "Kolkata", 22.5726, 88.3639),
    ("kota", "Kota", 25.2138, 75.8648),
    ("lucknow", "Lucknow", 26.8467, 80.9462),
    ("ludhiana", "Ludhiana", 30.9010, 75.8573),
    ("madurai", "Madurai", 9.9252, 78.1198),
    ("mangalore", "Mangaluru", 12.9141, 74.8560),
    ("mathura", "Mathura", 27.4924, 77.6737),
    ("meerut", "Meerut", 28.9845, 77.7064),
    ("moradabad", "Moradabad", 28.8386, 78.7733),
    ("mumbai", "Mumbai", 19.0760, 72.8777),
    ("bombay", "Mumbai", 19.0760, 72.8777),
    ("mysore", "Mysuru", 12.2958, 76.6394),
    ("nagpur", "Nagpur", 21.1458, 79.0882),
    ("nashik", "Nashik", 19.9975, 73.7898),
    ("noida", "Noida", 28.5355, 77.3910),
    ("patiala", "Patiala", 30.3398, 76.3869),
    ("patna", "Patna", 25.5941, 85.1376),
    ("puducherry", "Puducherry", 11.9416, 79.8083),
    ("pondicherry", "Puducherry", 11.9416, 79.8083),
    ("pune", "Pune", 18.5204, 73.8567),
    ("raipur", "Raipur", 21.2514, 81.6296),
    ("rajkot", "Rajkot", 22.3039, 70.8022),
    ("ranchi", "Ranchi", 23.3441, 85.3096),
    ("rishikesh", "Rishikesh", 30.0869, 78.2676),
    ("rohtak", "Rohtak", 28.8955, 76.6066),
    ("salem", "Salem", 11.6643, 78.1460),
    ("shimla", "Shimla", 31.1048, 77.1734),
    ("siliguri", "Siliguri", 26.7271, 88.3953),
    ("srinagar", "Srinagar", 34.0837, 74.7973),
    ("surat", "Surat", 21.1702, 72.8311),
    ("thane", "Thane", 19.2183, 72.9781),
    ("thiruvananthapuram", "Thiruvananthapuram", 8.5241, 76.9366),
    ("trivandrum", "Thiruvananthapuram", 8.5241, 76.9366),
    ("tiruchirappalli", "Tiruchirappalli", 10.7905, 78.7047),
    ("udaipur", "Udaipur", 24.5854, 73.7125),
    ("ujjain", "Ujjain", 23.1793, 75.7849),
    ("vadodara", "Vadodara", 22.3072, 73.1812),
    ("varanasi", "Varanasi", 25.3176, 82.9739),
    ("vijayawada", "Vijayawada", 16.5062, 80.6480),
    ("visakhapatnam", "Visakhapatnam", 17.6868, 83.2185),
    ("warangal", "Warangal", 17.9689, 79.5941),
];

/// UTC offsets by country, used when an external lookup lacks one.
pub const COUNTRY_OFFSETS: &[(&str, f64)] = &[
    ("india", 5.5),
    ("nepal", 5.75),
    ("sri lanka", 5.5),
    ("bangladesh", 6.0),
    ("pakistan", 5.0),
    ("united arab emirates", 4.0),
    ("singapore", 8.0),
    ("united kingdom", 0.0),
    ("united states", -5.0),
    ("canada", -5.0),
    ("australia", 10.0),
];

/// Offset for a country name (case-insensitive); None when unknown.
pub fn country_offset(country: &str) -> Option<f64> {
    let key = country.trim().to_lowercase();
    COUNTRY_OFFSETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, off)| off)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_keys_are_lowercase() {
        for (key, _, _, _) in INDIAN_CITIES {
            assert_eq!(*key, key.to_lowercase(), "key {key} not lowercase");
        }
    }

    #[test]
    fn city_coordinates_plausible() {
        for (key, _, lat, lon) in INDIAN_CITIES {
            assert!((*lat > 6.0) && (*lat < 37.0), "{key} latitude {lat}");
            assert!((*lon > 68.0) && (*lon < 98.0), "{key} longitude {lon}");
        }
    }

    #[test]
    fn country_lookup_case_insensitive() {
        assert_eq!(country_offset("India"), Some(5.5));
        assert_eq!(country_offset("NEPAL"), Some(5.75));
        assert_eq!(country_offset("atlantis"), None);
    }
}
