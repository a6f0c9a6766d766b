//! Source Catalog Module
//! Declarative table of the ten input files and the indicators they carry.

use std::fmt;

/// Name of the date column in every loaded table.
pub const DATE_COLUMN: &str = "DATE";

/// The eleven tracked series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    ConsumerPriceIndex,
    RentPrimaryResidence,
    OwnerEquivalentRent,
    DelinquencyCreditLoans,
    FedFundsRate,
    JobHoldersPrimaryFtSecondaryPt,
    JobHoldersBothFt,
    JobHoldersBothPt,
    JobHoldersPercentMen,
    JobHoldersPercentWomen,
    JobHoldersPercent,
}

impl Indicator {
    /// All indicators in stats-table column order.
    pub const ALL: [Indicator; 11] = [
        Indicator::ConsumerPriceIndex,
        Indicator::RentPrimaryResidence,
        Indicator::OwnerEquivalentRent,
        Indicator::DelinquencyCreditLoans,
        Indicator::FedFundsRate,
        Indicator::JobHoldersPrimaryFtSecondaryPt,
        Indicator::JobHoldersBothFt,
        Indicator::JobHoldersBothPt,
        Indicator::JobHoldersPercentMen,
        Indicator::JobHoldersPercentWomen,
        Indicator::JobHoldersPercent,
    ];

    /// Semantic column label used from normalization onwards.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::ConsumerPriceIndex => "ConsumerPriceIndex",
            Indicator::RentPrimaryResidence => "RentPrimaryResidence",
            Indicator::OwnerEquivalentRent => "OwnerEquivalentRent",
            Indicator::DelinquencyCreditLoans => "DelinquencyCreditCLoans",
            Indicator::FedFundsRate => "FedFundsEffectiveRate_MonthlyAve",
            Indicator::JobHoldersPrimaryFtSecondaryPt => "MULTJobHolders_Pri_FT_Sec_PT",
            Indicator::JobHoldersBothFt => "MULTJobHolders_Pri_Sec_BothFT",
            Indicator::JobHoldersBothPt => "MULTJobHolders_Pri_Sec_BothPT",
            Indicator::JobHoldersPercentMen => "MULTJobHolders_Perc_ofEmployed_M",
            Indicator::JobHoldersPercentWomen => "MULTJobHoldersPerc_ofEmployed_W",
            Indicator::JobHoldersPercent => "MULTJobHoldersPerc_ofEmployed",
        }
    }

    /// Position of this indicator in [`Indicator::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value column of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColumn {
    /// Upstream series identifier, assigned positionally on load.
    pub raw: &'static str,
    pub indicator: Indicator,
}

/// One input file: its name and its value columns in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpec {
    pub file_name: &'static str,
    pub columns: &'static [SourceColumn],
}

impl SourceSpec {
    /// Column names in file order, date first.
    pub fn raw_column_names(&self) -> Vec<&'static str> {
        std::iter::once(DATE_COLUMN)
            .chain(self.columns.iter().map(|c| c.raw))
            .collect()
    }
}

const fn column(raw: &'static str, indicator: Indicator) -> SourceColumn {
    SourceColumn { raw, indicator }
}

pub const SOURCES: [SourceSpec; 10] = [
    SourceSpec {
        file_name: "ConsumerPriceIndex.csv",
        columns: &[column("CPIAUCSL", Indicator::ConsumerPriceIndex)],
    },
    SourceSpec {
        file_name: "CPI_PrimRent_OwnerEquivalentRent.csv",
        columns: &[
            column("CUSR0000SEHA", Indicator::RentPrimaryResidence),
            column("CUSR0000SEHC01", Indicator::OwnerEquivalentRent),
        ],
    },
    SourceSpec {
        file_name: "DelinquencyCreditCLoans_DRCCLACBS.csv",
        columns: &[column("DRCCLACBS", Indicator::DelinquencyCreditLoans)],
    },
    SourceSpec {
        file_name: "FedFundsEffectiveRate_MonthlyAve.csv",
        columns: &[column("DFF", Indicator::FedFundsRate)],
    },
    SourceSpec {
        file_name: "MULTJobHolders_Pri_FT_Sec_PT.csv",
        columns: &[column("LNU02026625", Indicator::JobHoldersPrimaryFtSecondaryPt)],
    },
    SourceSpec {
        file_name: "MULTJobHolders_Pri_Sec_BothFT.csv",
        columns: &[column("LNU02026631", Indicator::JobHoldersBothFt)],
    },
    SourceSpec {
        file_name: "MULTJobHolders_Pri_Sec_BothPT.csv",
        columns: &[column("LNU02026628", Indicator::JobHoldersBothPt)],
    },
    SourceSpec {
        file_name: "MULTJobHoldersPerc_ofEmployed_GENDER_MEN.csv",
        columns: &[column("LNU02026622", Indicator::JobHoldersPercentMen)],
    },
    SourceSpec {
        file_name: "MULTJobHoldersPerc_ofEmployed_GENDER_WOMEN.csv",
        columns: &[column("LNU02026624", Indicator::JobHoldersPercentWomen)],
    },
    SourceSpec {
        file_name: "MULTJobHoldersPerc_ofEmployed.csv",
        columns: &[column("LNS12026620", Indicator::JobHoldersPercent)],
    },
];
