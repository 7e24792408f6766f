use typeahead::{Candidate, FieldSelectors, Price};

/// IGV (sales tax) applied on top of the subtotal
pub const IGV_RATE: f64 = 0.18;

/// A quoted catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub code: String,
    pub label: String,
    pub norm: Option<String>,
    pub accredited: bool,
    pub unit_price: f64,
    pub quantity: u32,
}

impl QuoteLine {
    pub fn partial(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub include_igv: bool,
}

impl Quote {
    pub fn new(include_igv: bool) -> Self {
        Self {
            lines: Vec::new(),
            include_igv,
        }
    }

    /// Add a candidate as a new line, or bump the quantity of the line with its code.
    /// Returns `None` when the candidate has no code.
    pub fn add<C: Candidate>(
        &mut self,
        candidate: &C,
        selectors: FieldSelectors<'_>,
    ) -> Option<&QuoteLine> {
        let code = selectors.code_of(candidate)?;

        if let Some(index) = self.lines.iter().position(|line| line.code == code) {
            let line = &mut self.lines[index];
            line.quantity = line.quantity.saturating_add(1);
            return self.lines.get(index);
        }

        self.lines.push(QuoteLine {
            code: code.to_string(),
            label: selectors.label_of(candidate).unwrap_or_default().to_string(),
            norm: candidate.norm().map(str::to_string),
            accredited: candidate.accredited(),
            // Missing or unparseable prices quote at zero
            unit_price: candidate.price().and_then(Price::amount).unwrap_or(0.0),
            quantity: 1,
        });
        self.lines.last()
    }

    pub fn remove_last(&mut self) -> Option<QuoteLine> {
        self.lines.pop()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(QuoteLine::partial).sum()
    }

    pub fn igv(&self) -> f64 {
        if self.include_igv {
            self.subtotal() * IGV_RATE
        } else {
            0.0
        }
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.igv()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Format an amount in soles, e.g. "S/. 1234.50"
pub fn format_amount(amount: f64) -> String {
    format!("S/. {:.2}", amount)
}
