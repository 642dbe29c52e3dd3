#[macro_export]
macro_rules! slim {
    // Handle null
    (null) => {
        $crate::SlimValue::Null
    };

    // Handle undefined
    (undefined) => {
        $crate::SlimValue::Undefined
    };

    // Handle true
    (true) => {
        $crate::SlimValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::SlimValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::SlimValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::SlimValue::Array(vec![$($crate::slim!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::SlimValue::Object($crate::SlimMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::SlimMap::new();
        $(
            object.insert($key.to_string(), $crate::slim!($value));
        )*
        $crate::SlimValue::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::SlimValue::Null)
    }};
}
