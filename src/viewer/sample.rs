//! Built-in sample report, shown when no report id is given.

pub const SAMPLE_TITLE: &str = "Sample Report: Drip Coffee Makers";

pub const SAMPLE_MARKDOWN: &str = r#"# Sample Report: Drip Coffee Makers

This is a sample of the product analysis you receive for an Amazon listing.
Figures below are illustrative.

## Executive Summary

The drip coffee maker category is mature but still growing at a steady pace.
Mid-priced programmable models hold the largest share of reviews.

## Market Overview

| Metric | Value |
|---|---|
| Category | Kitchen & Dining |
| Marketplace | US |
| Listings analysed | 48 |
| Median price | $59.99 |
| Median rating | 4.4 |

### Price Bands

- **Under $40**: high volume, thin margins
- **$40 to $90**: best balance of demand and margin
- **Over $90**: premium brands dominate

## Customer Sentiment

### What Buyers Love

- Fast brewing and a hot plate that keeps coffee warm
- Simple controls

### Common Complaints

- Carafe lids that drip when pouring
- Plastic taste in the first weeks of use

## Competitor Landscape

Three brands account for most of the review volume. Newer entrants compete
on design and on thermal carafes.

## Opportunities

1. A drip-free carafe lid addresses the most frequent complaint.
2. Stainless water paths answer the plastic-taste concern.
3. Bundles with a reusable filter lift the average order value.

## Risks

- Seasonal demand peaks around holidays.
- Price pressure from private-label listings.

## Recommendations

Focus on the $40 to $90 band, lead the listing with the carafe improvement,
and collect early reviews that mention taste.
"#;
