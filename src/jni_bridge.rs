//! Entry point for `com.voidmemories.restaurant_serializer.ExternalFunctions`.
//!
//! The Kotlin side passes the restaurant as a JSON transfer object, so no
//! class lookups or references outlive a single call.

use jni::objects::{JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{Restaurant, RestaurantJsonEncoder};

fn serialize(env: &mut JNIEnv<'_>, payload: &JString<'_>) -> anyhow::Result<String> {
    let payload: String = env.get_string(payload)?.into();
    let restaurant = Restaurant::from_json(&payload)?;
    Ok(RestaurantJsonEncoder::default().encode(&restaurant))
}

#[no_mangle]
pub extern "system" fn Java_com_voidmemories_restaurant_1serializer_ExternalFunctions_serializeRestaurant<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    payload: JString<'local>,
) -> jstring {
    let result = serialize(&mut env, &payload)
        .and_then(|json| env.new_string(json).map_err(anyhow::Error::from));
    match result {
        Ok(json) => json.into_raw(),
        Err(e) => {
            tracing::error!("fail to serialize restaurant: {e:#}");
            if let Err(e) = env.throw_new("java/lang/IllegalArgumentException", format!("{e:#}")) {
                tracing::error!("fail to raise java exception: {e}");
            }
            std::ptr::null_mut()
        }
    }
}
