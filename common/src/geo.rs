//! 大圏距離の計算

/// 地球半径（km）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// ハーバーサイン公式で2点間の距離を求め、km単位で四捨五入する
///
/// NaNを含む入力はNaNを返す。
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    (EARTH_RADIUS_KM * c).round()
}
