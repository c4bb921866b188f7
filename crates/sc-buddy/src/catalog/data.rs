//! The constant SC Buddy metric table.

use super::{FormulaRule, MetricCategory, MetricDefinition};

pub(super) fn standard_categories() -> Vec<MetricCategory> {
    vec![
        MetricCategory {
            name: "Inventory Metrics",
            metrics: vec![
                MetricDefinition {
                    name: "Inventory Turnover",
                    formula: "Inventory Turnover = Cost of Goods Sold (COGS) / Average Inventory",
                    description: "Measures how quickly inventory is sold and replaced.",
                    rule: FormulaRule::Ratio {
                        numerator: "Cost of Goods Sold (COGS)",
                        denominator: "Average Inventory",
                    },
                },
                MetricDefinition {
                    name: "Inventory Days of Supply",
                    formula: "Inventory Days of Supply = Average Inventory / Average Daily Demand",
                    description: "Measures the number of days inventory will last at current demand levels.",
                    rule: FormulaRule::Ratio {
                        numerator: "Average Inventory",
                        denominator: "Average Daily Demand",
                    },
                },
                MetricDefinition {
                    name: "Fill Rate",
                    formula: "Fill Rate = (Number of Orders Filled Completely) / (Total Number of Orders)",
                    description: "Measures the percentage of customer orders that are filled completely from existing inventory.",
                    rule: FormulaRule::Ratio {
                        numerator: "Number of Orders Filled Completely",
                        denominator: "Total Number of Orders",
                    },
                },
            ],
        },
        MetricCategory {
            name: "Logistics and Transportation Metrics",
            metrics: vec![
                MetricDefinition {
                    name: "On-Time Delivery Rate",
                    formula: "On-Time Delivery Rate = (Number of Deliveries Made On-Time) / (Total Number of Deliveries)",
                    description: "Measures the percentage of deliveries made on or before the scheduled delivery date.",
                    rule: FormulaRule::Ratio {
                        numerator: "Number of Deliveries Made On-Time",
                        denominator: "Total Number of Deliveries",
                    },
                },
                MetricDefinition {
                    name: "Transportation Cost as a Percentage of Revenue",
                    formula: "Transportation Cost as a Percentage of Revenue = (Transportation Cost) / (Revenue)",
                    description: "Measures the cost of transportation as a percentage of total revenue.",
                    rule: FormulaRule::Ratio {
                        numerator: "Transportation Cost",
                        denominator: "Revenue",
                    },
                },
                MetricDefinition {
                    name: "Freight Cost Per Unit",
                    formula: "Freight Cost Per Unit = Total Freight Cost / Total Number of Units Shipped",
                    description: "Measures the average cost of shipping one unit of product.",
                    rule: FormulaRule::Ratio {
                        numerator: "Total Freight Cost",
                        denominator: "Total Number of Units Shipped",
                    },
                },
            ],
        },
        MetricCategory {
            name: "Supply Chain Reliability Metrics",
            metrics: vec![
                MetricDefinition {
                    name: "Supply Chain Reliability",
                    formula: "Supply Chain Reliability = (Number of Orders Delivered On-Time and In-Full) / (Total Number of Orders)",
                    description: "Measures the percentage of orders that are delivered on-time and in-full.",
                    rule: FormulaRule::Ratio {
                        numerator: "Number of Orders Delivered On-Time and In-Full",
                        denominator: "Total Number of Orders",
                    },
                },
                MetricDefinition {
                    name: "Mean Time Between Failures (MTBF)",
                    formula: "MTBF = Total Operating Time / Number of Failures",
                    description: "Measures the average time between equipment failures.",
                    rule: FormulaRule::Ratio {
                        numerator: "Total Operating Time",
                        denominator: "Number of Failures",
                    },
                },
                MetricDefinition {
                    name: "Mean Time To Repair (MTTR)",
                    formula: "MTTR = Total Downtime / Number of Failures",
                    description: "Measures the average time it takes to repair equipment after a failure.",
                    rule: FormulaRule::Ratio {
                        numerator: "Total Downtime",
                        denominator: "Number of Failures",
                    },
                },
            ],
        },
        MetricCategory {
            name: "Supply Chain Flexibility Metrics",
            metrics: vec![
                MetricDefinition {
                    name: "Supply Chain Flexibility Index",
                    formula: "Supply Chain Flexibility Index = (Number of Supply Chain Configurations) / (Total Number of Possible Configurations)",
                    description: "Measures the ability of the supply chain to adapt to changing market conditions.",
                    rule: FormulaRule::Ratio {
                        numerator: "Number of Supply Chain Configurations",
                        denominator: "Total Number of Possible Configurations",
                    },
                },
                MetricDefinition {
                    name: "Time to Market",
                    formula: "Time to Market = Total Time from Product Design to Launch",
                    description: "Measures the time it takes to bring a new product to market.",
                    rule: FormulaRule::PassThrough {
                        input: "Total Time from Product Design to Launch",
                    },
                },
                MetricDefinition {
                    name: "Supply Chain Responsiveness",
                    formula: "Supply Chain Responsiveness = (Number of Orders Filled Within a Certain Timeframe) / (Total Number of Orders)",
                    description: "Measures the ability of the supply chain to respond quickly to changing customer demand.",
                    rule: FormulaRule::Ratio {
                        numerator: "Number of Orders Filled Within a Certain Timeframe",
                        denominator: "Total Number of Orders",
                    },
                },
            ],
        },
    ]
}
