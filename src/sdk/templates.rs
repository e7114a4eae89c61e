//! Per-language producer/consumer samples. `<memphis-host>` and
//! `<station_name>` are substituted at render time; the remaining angle
//! bracket placeholders are left for the reader to fill in.

use super::Language;

pub struct CodeExample {
    pub installation: &'static str,
    pub producer: &'static str,
    pub consumer: &'static str,
}

pub fn example_for(language: Language) -> &'static CodeExample {
    match language {
        Language::Go => &GO,
        Language::NodeJs => &NODE_JS,
        Language::Typescript => &TYPESCRIPT,
        Language::Python => &PYTHON,
    }
}

static GO: CodeExample = CodeExample {
    installation: "go get github.com/memphisdev/memphis.go",
    producer: r#"package main

import (
    "fmt"
    "os"

    "github.com/memphisdev/memphis.go"
)

func main() {
    conn, err := memphis.Connect("<memphis-host>", "<application type username>", "<broker-token>")
    if err != nil {
        os.Exit(1)
    }
    defer conn.Close()

    p, err := conn.CreateProducer("<station_name>", "<producer_name>")
    if err != nil {
        fmt.Printf("Producer creation failed: %v", err)
        os.Exit(1)
    }

    hdrs := memphis.Headers{}
    hdrs.New()
    if err := hdrs.Add("key", "value"); err != nil {
        fmt.Printf("Header failed: %v", err)
        os.Exit(1)
    }

    err = p.Produce([]byte("You have a message!"), memphis.MsgHeaders(hdrs))
    if err != nil {
        fmt.Printf("Produce failed: %v", err)
        os.Exit(1)
    }
}
"#,
    consumer: r#"package main

import (
    "fmt"
    "os"
    "time"

    "github.com/memphisdev/memphis.go"
)

func main() {
    conn, err := memphis.Connect("<memphis-host>", "<application type username>", "<broker-token>")
    if err != nil {
        os.Exit(1)
    }
    defer conn.Close()

    consumer, err := conn.CreateConsumer("<station_name>", "<consumer_name>", memphis.PullInterval(15*time.Second))
    if err != nil {
        fmt.Printf("Consumer creation failed: %v", err)
        os.Exit(1)
    }

    handler := func(msgs []*memphis.Msg, err error) {
        if err != nil {
            fmt.Printf("Fetch failed: %v", err)
            return
        }
        for _, msg := range msgs {
            fmt.Println(string(msg.Data()))
            msg.Ack()
        }
    }

    consumer.Consume(handler)

    // The program will close the connection after 30 seconds,
    // the message handler may be called after the connection closed
    // so the handler may receive a timeout error
    time.Sleep(30 * time.Second)
}
"#,
};

static NODE_JS: CodeExample = CodeExample {
    installation: "npm i memphis-dev --save",
    producer: r#"const memphis = require("memphis-dev");

(async function () {
    try {
        await memphis.connect({
            host: "<memphis-host>",
            username: "<application type username>",
            connectionToken: "<broker-token>"
        });

        const producer = await memphis.producer({
            stationName: "<station_name>",
            producerName: "<producer_name>"
        });

        const headers = memphis.headers();
        headers.add("key", "value");
        await producer.produce({
            message: Buffer.from("Hello world"),
            headers: headers
        });

        console.log("Message sent");
        memphis.close();
    } catch (ex) {
        console.log(ex);
        memphis.close();
    }
})();
"#,
    consumer: r#"const memphis = require("memphis-dev");

(async function () {
    try {
        await memphis.connect({
            host: "<memphis-host>",
            username: "<application type username>",
            connectionToken: "<broker-token>"
        });

        const consumer = await memphis.consumer({
            stationName: "<station_name>",
            consumerName: "<consumer_name>",
            consumerGroup: ""
        });

        consumer.on("message", (message) => {
            console.log(message.getData().toString());
            message.ack();
        });

        consumer.on("error", (error) => {
            console.log(error);
        });
    } catch (ex) {
        console.log(ex);
        memphis.close();
    }
})();
"#,
};

static TYPESCRIPT: CodeExample = CodeExample {
    installation: "npm i memphis-dev --save",
    producer: r#"import memphis from "memphis-dev";
import type { Memphis } from "memphis-dev/types";

(async function () {
    let memphisConnection: Memphis;

    try {
        memphisConnection = await memphis.connect({
            host: "<memphis-host>",
            username: "<application type username>",
            connectionToken: "<broker-token>"
        });

        const producer = await memphisConnection.producer({
            stationName: "<station_name>",
            producerName: "<producer_name>"
        });

        const headers = memphis.headers();
        headers.add("key", "value");
        await producer.produce({
            message: Buffer.from("Hello world"),
            headers: headers
        });

        console.log("Message sent");
        memphisConnection.close();
    } catch (ex) {
        console.log(ex);
        if (memphisConnection) memphisConnection.close();
    }
})();
"#,
    consumer: r#"import memphis from "memphis-dev";
import type { Memphis, Message } from "memphis-dev/types";

(async function () {
    let memphisConnection: Memphis;

    try {
        memphisConnection = await memphis.connect({
            host: "<memphis-host>",
            username: "<application type username>",
            connectionToken: "<broker-token>"
        });

        const consumer = await memphisConnection.consumer({
            stationName: "<station_name>",
            consumerName: "<consumer_name>",
            consumerGroup: ""
        });

        consumer.on("message", (message: Message) => {
            console.log(message.getData().toString());
            message.ack();
        });

        consumer.on("error", (error) => {
            console.log(error);
        });
    } catch (ex) {
        console.log(ex);
        if (memphisConnection) memphisConnection.close();
    }
})();
"#,
};

static PYTHON: CodeExample = CodeExample {
    installation: "pip3 install memphis-py",
    producer: r#"import asyncio
from memphis import Memphis, Headers, MemphisError, MemphisConnectError, MemphisHeaderError


async def main():
    try:
        memphis = Memphis()
        await memphis.connect(host="<memphis-host>", username="<application type username>", connection_token="<broker-token>")

        producer = await memphis.producer(station_name="<station_name>", producer_name="<producer_name>")
        headers = Headers()
        headers.add("key", "value")
        for i in range(5):
            await producer.produce(bytearray("Message #" + str(i) + ": Hello world", "utf-8"), headers=headers)

    except (MemphisError, MemphisConnectError, MemphisHeaderError) as e:
        print(e)

    finally:
        await memphis.close()


if __name__ == "__main__":
    asyncio.run(main())
"#,
    consumer: r#"import asyncio
from memphis import Memphis, MemphisError, MemphisConnectError, MemphisHeaderError


async def main():
    async def msg_handler(msgs, error):
        try:
            for msg in msgs:
                print("message: ", msg.get_data())
                await msg.ack()
            if error:
                print(error)
        except (MemphisError, MemphisConnectError, MemphisHeaderError) as e:
            print(e)
            return

    try:
        memphis = Memphis()
        await memphis.connect(host="<memphis-host>", username="<application type username>", connection_token="<broker-token>")

        consumer = await memphis.consumer(station_name="<station_name>", consumer_name="<consumer_name>", consumer_group="")
        consumer.consume(msg_handler)
        # Keep your main thread alive so the consumer will keep receiving data
        await asyncio.Event().wait()

    except (MemphisError, MemphisConnectError) as e:
        print(e)

    finally:
        await memphis.close()


if __name__ == "__main__":
    asyncio.run(main())
"#,
};
