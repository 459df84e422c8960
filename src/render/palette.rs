//! Background colors keyed by division; `None` is the unknown-profile palette.

use crate::domain::Division;

/// Three-stop gradient used by the default, alternate and mini badges.
pub fn gradient(division: Option<Division>) -> [&'static str; 3] {
    match division {
        None => ["#AAAAAA", "#666666", "#000000"],
        Some(Division::Unrated) => ["#666666", "#2D2D2D", "#040202"],
        Some(Division::Bronze) => ["#F49347", "#984400", "#492000"],
        Some(Division::Silver) => ["#939195", "#6B7E91", "#1F354A"],
        Some(Division::Gold) => ["#FFC944", "#FFAF44", "#FF9632"],
        Some(Division::Platinum) => ["#8CC584", "#45B2D3", "#51A795"],
        Some(Division::Diamond) => ["#96B8DC", "#3EA5DB", "#4D6399"],
        Some(Division::Ruby) => ["#E45B62", "#E14476", "#CA0059"],
        Some(Division::Master) => ["#83f8fe", "#b297fc", "#fc7ea8"],
    }
}

/// Two-stop gradient used by the pastel badge.
pub fn pastel(division: Option<Division>) -> [&'static str; 2] {
    match division {
        None => ["#eeeeee", "#dadada"],
        Some(Division::Unrated) => ["#dddddd", "#aaaaaa"],
        Some(Division::Bronze) => ["rgb(197, 164, 143)", "rgb(222, 176, 132)"],
        Some(Division::Silver) => ["rgb(225, 204, 204)", "rgb(182, 178, 177)"],
        Some(Division::Gold) => ["rgb(255, 237, 150)", "rgb(255, 190, 138)"],
        Some(Division::Platinum) => ["rgb(180, 247, 249)", "rgb(200, 255, 218)"],
        Some(Division::Diamond) => ["rgb(195, 236, 249)", "rgb(187, 202, 250)"],
        Some(Division::Ruby) => ["rgb(253, 205, 185)", "rgb(255, 130, 155)"],
        Some(Division::Master) => ["rgb(196, 254, 255)", "rgb(255, 210, 234)"],
    }
}
