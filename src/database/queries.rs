//! Fixed SQL statements behind the API endpoints.
//!
//! The sector value is always bound as `?1`, never spliced into the statement.

/// Distinct sector labels across all companies, sorted ascending.
pub const SECTOR_LIST: &str = "\
    SELECT DISTINCT sectorBig \
    FROM company \
    ORDER BY sectorBig";

/// Distinct company names in one sector, sorted ascending.
pub const COMPANIES_BY_SECTOR: &str = "\
    SELECT DISTINCT name \
    FROM company \
    WHERE sectorBig = ?1 \
    ORDER BY name";

/// All finance rows for companies in one sector, ordered by company name.
pub const FINANCES_BY_SECTOR: &str = "\
    SELECT f.* \
    FROM finance f \
    INNER JOIN company c ON f.code = c.code \
    WHERE c.sectorBig = ?1 \
    ORDER BY c.name";
