use poco_core::Dialect;

/// SQL dialects, as far as identifier quoting goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `[name]`
    Sqlite,

    /// `[name]`
    SqlServer,

    /// `"name"`
    Postgresql,

    /// `` `name` ``
    Mysql,

    /// `"NAME"`
    Oracle,
}

impl Flavor {
    fn quotes(self) -> (char, char) {
        match self {
            Flavor::Sqlite | Flavor::SqlServer => ('[', ']'),
            Flavor::Postgresql | Flavor::Oracle => ('"', '"'),
            Flavor::Mysql => ('`', '`'),
        }
    }
}

impl Dialect for Flavor {
    fn escape_identifier(&self, name: &str) -> String {
        let (open, close) = self.quotes();

        let mut ret = String::with_capacity(name.len() + 2);
        ret.push(open);

        for c in name.chars() {
            if c == close {
                ret.push(close);
            }

            match self {
                Flavor::Oracle => ret.extend(c.to_uppercase()),
                _ => ret.push(c),
            }
        }

        ret.push(close);
        ret
    }
}
