use std::fmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count(u64),
    /// Bytes.
    Size(u64),
    /// Seconds.
    Time(f64),
    Float(f64),
    Distribution { avg: f64, min: u64, max: u64 },
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }
    let kb = (bytes as f64) / 1024.0;
    if kb < 1024.0 {
        return format!("{:.1} KB", kb);
    }
    let mib = kb / 1024.0;
    if mib < 1024.0 {
        format!("{:.1} MiB", mib)
    } else {
        format!("{:.1} GiB", mib / 1024.0)
    }
}

fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{:.1} ms", seconds * 1000.0)
    } else {
        format!("{:.3} s", seconds)
    }
}

impl Display for StatValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            StatValue::Count(v) => write!(f, "{}", v),
            StatValue::Size(v) => write!(f, "{}", format_size(*v)),
            StatValue::Time(v) => write!(f, "{}", format_time(*v)),
            StatValue::Float(v) => write!(f, "{:.3}", v),
            StatValue::Distribution { avg, min, max } => {
                write!(f, "avg {:.1}  min {}  max {}", avg, min, max)
            }
        }
    }
}

/// An ordered list of named measurements, printed as an aligned block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    entries: Vec<(String, StatValue)>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `name`, replacing a previous entry of the
    /// same name in place.
    pub fn insert(&mut self, name: &str, value: StatValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn insert_count(&mut self, name: &str, value: u64) {
        self.insert(name, StatValue::Count(value));
    }

    pub fn insert_size(&mut self, name: &str, bytes: u64) {
        self.insert(name, StatValue::Size(bytes));
    }

    pub fn insert_time(&mut self, name: &str, seconds: f64) {
        self.insert(name, StatValue::Time(seconds));
    }

    pub fn insert_float(&mut self, name: &str, value: f64) {
        self.insert(name, StatValue::Float(value));
    }

    pub fn insert_distribution(&mut self, name: &str, values: &[u64]) {
        if values.is_empty() {
            return;
        }
        let sum: u64 = values.iter().sum();
        self.insert(
            name,
            StatValue::Distribution {
                avg: sum as f64 / values.len() as f64,
                min: values.iter().copied().min().unwrap_or(0),
                max: values.iter().copied().max().unwrap_or(0),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&StatValue> {
        return self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v);
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn to_string_with_title(&self, title: &str) -> String {
        let width = self.entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        let mut s = format!("{}:", title);
        for (name, value) in self.entries.iter() {
            s.push_str(&format!("\n  {:<width$}  {}", name, value, width = width));
        }
        return s;
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.to_string_with_title("Statistics"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut stats = Statistics::new();
        stats.insert_size("nodes alignment", 64);
        stats.insert_time("total time", 0.0125);
        stats.insert_count("nodes", 7);
        stats.insert_count("nodes", 9);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.get("nodes"), Some(&StatValue::Count(9)));
        let s = stats.to_string_with_title("curve tree #1 statistics");
        assert_eq!(
            s,
            "curve tree #1 statistics:\n  nodes alignment  64 bytes\n  total time       12.5 ms\n  nodes            9"
        );
    }

    #[test]
    fn test_002() {
        let mut stats = Statistics::new();
        stats.insert_distribution("leaf size", &[1, 2, 3, 6]);
        stats.insert_distribution("ignored", &[]);
        assert_eq!(
            stats.get("leaf size"),
            Some(&StatValue::Distribution {
                avg: 3.0,
                min: 1,
                max: 6
            })
        );
        assert!(stats.get("ignored").is_none());
        assert_eq!(format!("{}", StatValue::Size(3 * 1024 * 1024)), "3.0 MiB");
    }
}
