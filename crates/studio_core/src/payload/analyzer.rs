use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct IdeaAnalysis {
    pub value_proposition: Option<String>,
    pub business_model: Option<String>,
    pub innovation_level: Option<String>,
    /// 0-10.
    pub uniqueness_score: f64,
    pub key_insights: Vec<String>,
    /// 0-10; feeds the overall score board.
    pub overall_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompetitorEntry {
    pub name: Option<String>,
    pub strength: Option<String>,
    pub weakness: Option<String>,
    pub market_share: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompetitorAnalysis {
    pub direct_competitors: Vec<CompetitorEntry>,
    pub competitive_advantages: Vec<String>,
    pub market_gaps: Vec<String>,
    pub differentiation_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub age: Option<String>,
    pub income: Option<String>,
    pub geography: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MarketAnalysis {
    pub maturity_level: Option<String>,
    pub growth_rate: Option<String>,
    pub target_demographics: Option<Demographics>,
    pub market_trends: Vec<String>,
    /// Total / serviceable / obtainable market, free-form ("$12B").
    pub tam: Option<String>,
    pub sam: Option<String>,
    pub som: Option<String>,
    pub market_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RevenueProjections {
    pub year1: Option<String>,
    pub year2: Option<String>,
    pub year3: Option<String>,
    pub year4: Option<String>,
    pub year5: Option<String>,
}

impl RevenueProjections {
    /// Numeric series for charting, one point per year. Free-form values
    /// like "$1.2M" contribute their leading number; absent years are 0.
    pub fn series(&self) -> [f64; 5] {
        [
            leading_number(self.year1.as_deref()),
            leading_number(self.year2.as_deref()),
            leading_number(self.year3.as_deref()),
            leading_number(self.year4.as_deref()),
            leading_number(self.year5.as_deref()),
        ]
    }
}

fn leading_number(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FinancialAnalysis {
    pub investment_required: Option<String>,
    pub roi_potential: Option<String>,
    pub profitability_timeline: Option<String>,
    pub financial_risk: Option<String>,
    pub revenue_projections: Option<RevenueProjections>,
    pub market_cap_potential: Option<String>,
    pub financial_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FutureAnalysis {
    pub scalability_score: f64,
    pub long_term_viability: Option<String>,
    pub tech_adoption: Option<String>,
    pub expansion_opportunities: Vec<String>,
    pub future_trends: Vec<String>,
    pub five_year_outlook: Option<String>,
    pub future_score: f64,
}
